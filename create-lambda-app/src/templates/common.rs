use super::TemplateEntry;

pub(super) const FILES: &[TemplateEntry] = &[
    template!("go.mod" => "common/go.mod"),
    template!("Makefile" => "common/Makefile"),
    template!("README.md" => "common/README.md"),
    template!(".gitignore" => "common/gitignore"),
    template!(".env.example" => "common/env.example"),
    template!("docker-compose.yml" => "common/docker-compose.yml"),
    template!("Dockerfile" => "common/Dockerfile"),
    verbatim!(".github/workflows/ci.yml" => "common/ci.yml"),
    verbatim!(".github/workflows/deploy.yml" => "common/deploy.yml"),
    template!("docs/ARCHITECTURE.md" => "common/ARCHITECTURE.md"),
    template!("docs/DEPLOYMENT.md" => "common/DEPLOYMENT.md"),
    template!("docs/API.md" => "common/API.md"),
    template!("scripts/generate-handler.go" => "common/generate-handler.go"),
    template!("scripts/local-setup.sh" => "common/local-setup.sh").executable(),
    template!("test/testutils/utils.go" => "common/testutils.go"),
];
