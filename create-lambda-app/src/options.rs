use std::collections::{BTreeMap, BTreeSet};

use scaffold_core::naming::validate_text_field;
use scaffold_core::{Choice, ScaffoldError};
use serde::Serialize;

/// Project layout of the generated Go code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Architecture {
    Clean,
    Simple,
    Ddd,
}

impl Choice for Architecture {
    const KIND: &'static str = "architecture";
    const ALL: &'static [Self] = &[Architecture::Clean, Architecture::Simple, Architecture::Ddd];

    fn as_str(self) -> &'static str {
        match self {
            Architecture::Clean => "clean",
            Architecture::Simple => "simple",
            Architecture::Ddd => "ddd",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Architecture::Clean => "Clean Architecture with use cases",
            Architecture::Simple => "Simple handler-based structure",
            Architecture::Ddd => "Domain-Driven Design",
        }
    }
}

/// Infrastructure-as-code flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeploymentTool {
    Sam,
    Cdk,
    Serverless,
    Terraform,
}

impl Choice for DeploymentTool {
    const KIND: &'static str = "deployment tool";
    const ALL: &'static [Self] = &[
        DeploymentTool::Sam,
        DeploymentTool::Cdk,
        DeploymentTool::Serverless,
        DeploymentTool::Terraform,
    ];

    fn as_str(self) -> &'static str {
        match self {
            DeploymentTool::Sam => "sam",
            DeploymentTool::Cdk => "cdk",
            DeploymentTool::Serverless => "serverless",
            DeploymentTool::Terraform => "terraform",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            DeploymentTool::Sam => "AWS Serverless Application Model - AWS native, simple configuration",
            DeploymentTool::Cdk => "AWS Cloud Development Kit - TypeScript, programmable infrastructure",
            DeploymentTool::Serverless => "Serverless Framework - Multi-cloud, large plugin ecosystem",
            DeploymentTool::Terraform => "HashiCorp Terraform - Multi-provider, declarative infrastructure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestingFramework {
    Testify,
    Standard,
    Ginkgo,
}

impl Choice for TestingFramework {
    const KIND: &'static str = "testing framework";
    const ALL: &'static [Self] = &[
        TestingFramework::Testify,
        TestingFramework::Standard,
        TestingFramework::Ginkgo,
    ];

    fn as_str(self) -> &'static str {
        match self {
            TestingFramework::Testify => "testify",
            TestingFramework::Standard => "standard",
            TestingFramework::Ginkgo => "ginkgo",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            TestingFramework::Testify => "Assertions and mocks",
            TestingFramework::Standard => "Standard library only",
            TestingFramework::Ginkgo => "BDD-style testing",
        }
    }
}

/// Optional AWS integrations. `Api`, `Dynamodb` and `Sqs` add files; the
/// others only toggle sections of shared templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LambdaFeature {
    Api,
    Dynamodb,
    Sqs,
    Sns,
    S3,
    Cognito,
    Secrets,
    Eventbridge,
    Stepfunctions,
}

impl Choice for LambdaFeature {
    const KIND: &'static str = "feature";
    const ALL: &'static [Self] = &[
        LambdaFeature::Api,
        LambdaFeature::Dynamodb,
        LambdaFeature::Sqs,
        LambdaFeature::Sns,
        LambdaFeature::S3,
        LambdaFeature::Cognito,
        LambdaFeature::Secrets,
        LambdaFeature::Eventbridge,
        LambdaFeature::Stepfunctions,
    ];

    fn as_str(self) -> &'static str {
        match self {
            LambdaFeature::Api => "api",
            LambdaFeature::Dynamodb => "dynamodb",
            LambdaFeature::Sqs => "sqs",
            LambdaFeature::Sns => "sns",
            LambdaFeature::S3 => "s3",
            LambdaFeature::Cognito => "cognito",
            LambdaFeature::Secrets => "secrets",
            LambdaFeature::Eventbridge => "eventbridge",
            LambdaFeature::Stepfunctions => "stepfunctions",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            LambdaFeature::Api => "API Gateway - REST APIs with routing and validation",
            LambdaFeature::Dynamodb => "DynamoDB - NoSQL database for user data",
            LambdaFeature::Sqs => "SQS - Message queue for async processing",
            LambdaFeature::Sns => "SNS - Pub/sub messaging for notifications",
            LambdaFeature::S3 => "S3 - Object storage for files/media",
            LambdaFeature::Cognito => "Cognito - User authentication and authorization",
            LambdaFeature::Secrets => "Secrets Manager - Store API keys and credentials",
            LambdaFeature::Eventbridge => "EventBridge - Event-driven triggers",
            LambdaFeature::Stepfunctions => "Step Functions - Workflow orchestration",
        }
    }
}

/// Fully resolved choices for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub name: String,
    pub description: String,
    /// Go module path, e.g. `github.com/octo/orders-api`.
    pub module: String,
    pub architecture: Architecture,
    pub deployment: DeploymentTool,
    pub testing: TestingFramework,
    pub features: BTreeSet<LambdaFeature>,
    pub skip_git: bool,
    pub skip_install: bool,
}

impl LambdaConfig {
    /// A configuration with the built-in defaults, as produced by
    /// `create-lambda-app <name> --yes` outside any git checkout.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: default_description(&name),
            module: default_module(None, &name),
            name,
            architecture: Architecture::Clean,
            deployment: DeploymentTool::Sam,
            testing: TestingFramework::Testify,
            features: BTreeSet::from([LambdaFeature::Api]),
            skip_git: true,
            skip_install: true,
        }
    }

    pub fn has(&self, feature: LambdaFeature) -> bool {
        self.features.contains(&feature)
    }

    /// Check the free-text fields that are substituted into templates.
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        validate_text_field("description", &self.description)?;
        validate_text_field("module", &self.module)
    }

    /// Values visible to templates.
    pub fn template_context(&self) -> TemplateContext<'_> {
        TemplateContext {
            name: &self.name,
            description: &self.description,
            module: &self.module,
            architecture: self.architecture.as_str(),
            deployment: self.deployment.as_str(),
            testing: self.testing.as_str(),
            features: LambdaFeature::ALL
                .iter()
                .map(|f| (f.as_str(), self.has(*f)))
                .collect(),
        }
    }

    /// Choices recorded in the `.create-lambda-app` metadata file.
    pub fn recorded_choices(&self) -> RecordedChoices<'_> {
        RecordedChoices {
            name: &self.name,
            module: &self.module,
            architecture: self.architecture.as_str(),
            deployment: self.deployment.as_str(),
            testing: self.testing.as_str(),
            features: self.features.iter().map(|f| f.as_str()).collect(),
        }
    }
}

/// Template context. `features` holds every known feature, so templates
/// can test `features.sqs` under strict undefined checking.
#[derive(Debug, Serialize)]
pub struct TemplateContext<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub module: &'a str,
    pub architecture: &'static str,
    pub deployment: &'static str,
    pub testing: &'static str,
    pub features: BTreeMap<&'static str, bool>,
}

#[derive(Debug, Serialize)]
pub struct RecordedChoices<'a> {
    pub name: &'a str,
    pub module: &'a str,
    pub architecture: &'static str,
    pub deployment: &'static str,
    pub testing: &'static str,
    pub features: Vec<&'static str>,
}

pub fn default_description(name: &str) -> String {
    format!("AWS Lambda functions for {name}")
}

/// `github.com/<user>/<name>`, with `myusername` when no user is known.
pub fn default_module(github_user: Option<&str>, name: &str) -> String {
    format!("github.com/{}/{name}", github_user.unwrap_or("myusername"))
}
