use super::TemplateEntry;

pub(super) const SAM: &[TemplateEntry] = &[
    template!("template.yaml" => "sam/template.yaml"),
    template!("samconfig.toml" => "sam/samconfig.toml"),
    template!("buildspec.yml" => "sam/buildspec.yml"),
    template!("deployments/dev.yaml" => "sam/dev.yaml"),
    template!("deployments/staging.yaml" => "sam/staging.yaml"),
    template!("deployments/prod.yaml" => "sam/prod.yaml"),
];

pub(super) const CDK: &[TemplateEntry] = &[
    template!("cdk/cdk.json" => "cdk/cdk.json"),
    template!("cdk/tsconfig.json" => "cdk/tsconfig.json"),
    template!("cdk/package.json" => "cdk/package.json"),
    template!("cdk/lib/stack.ts" => "cdk/stack.ts"),
    template!("cdk/bin/app.ts" => "cdk/app.ts"),
    template!("cdk/test/stack.test.ts" => "cdk/stack.test.ts"),
];

pub(super) const SERVERLESS: &[TemplateEntry] = &[
    template!("serverless.yml" => "serverless/serverless.yml"),
    template!("serverless.env.yml" => "serverless/serverless.env.yml"),
    template!("deployments/dev.yml" => "serverless/dev.yml"),
    template!("deployments/staging.yml" => "serverless/staging.yml"),
    template!("deployments/production.yml" => "serverless/production.yml"),
];

pub(super) const TERRAFORM: &[TemplateEntry] = &[
    template!("terraform/main.tf" => "terraform/main.tf"),
    template!("terraform/variables.tf" => "terraform/variables.tf"),
    template!("terraform/outputs.tf" => "terraform/outputs.tf"),
    template!("terraform/versions.tf" => "terraform/versions.tf"),
    template!("terraform/environments/dev.tfvars" => "terraform/dev.tfvars"),
    template!("terraform/environments/prod.tfvars" => "terraform/prod.tfvars"),
    template!("terraform/modules/lambda/main.tf" => "terraform/lambda_module.tf"),
];
