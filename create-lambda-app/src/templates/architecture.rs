use super::Layout;

pub(super) const CLEAN: Layout = Layout {
    dirs: &[
        "cmd",
        "internal/domain/entities",
        "internal/domain/repositories",
        "internal/domain/services",
        "internal/usecases",
        "internal/interfaces/lambda",
        "internal/interfaces/api",
        "internal/infrastructure/database",
        "internal/infrastructure/aws",
        "internal/infrastructure/config",
        "pkg/logger",
        "pkg/errors",
        "pkg/middleware",
        "test/unit",
        "test/integration",
        "test/e2e",
        "test/mocks",
        "docs",
        "scripts",
        "deployments",
    ],
    files: &[
        template!("cmd/handler/main.go" => "clean/cmd_main.go"),
        template!("internal/domain/entities/base.go" => "clean/base_entity.go"),
        template!("internal/domain/repositories/interfaces.go" => "clean/repository_interface.go"),
        template!("internal/usecases/interfaces.go" => "clean/usecase_interface.go"),
        template!("internal/interfaces/lambda/handler.go" => "clean/lambda_handler.go"),
        template!("internal/infrastructure/config/config.go" => "clean/config.go"),
        template!("pkg/logger/logger.go" => "clean/logger.go"),
        template!("pkg/errors/errors.go" => "clean/errors.go"),
        template!("pkg/middleware/middleware.go" => "clean/middleware.go"),
    ],
};

pub(super) const SIMPLE: Layout = Layout {
    dirs: &[
        "handlers",
        "models",
        "services",
        "utils",
        "config",
        "test",
        "scripts",
        "deployments",
    ],
    files: &[
        template!("handlers/main.go" => "simple/handler.go"),
        template!("models/models.go" => "simple/models.go"),
        template!("services/service.go" => "simple/service.go"),
        template!("utils/utils.go" => "simple/utils.go"),
        template!("config/config.go" => "simple/config.go"),
    ],
};

pub(super) const DDD: Layout = Layout {
    dirs: &[
        "cmd",
        "domain/aggregate",
        "domain/entity",
        "domain/valueobject",
        "domain/repository",
        "domain/service",
        "domain/event",
        "application/command",
        "application/query",
        "application/handler",
        "infrastructure/persistence",
        "infrastructure/messaging",
        "infrastructure/config",
        "interfaces/lambda",
        "interfaces/api",
        "test",
        "scripts",
        "deployments",
    ],
    files: &[
        template!("cmd/handler/main.go" => "ddd/cmd_main.go"),
        template!("domain/aggregate/base.go" => "ddd/aggregate_base.go"),
        template!("domain/entity/base.go" => "ddd/entity_base.go"),
        template!("domain/valueobject/base.go" => "ddd/value_object.go"),
        template!("domain/repository/interfaces.go" => "ddd/repository.go"),
        template!("domain/event/base.go" => "ddd/event.go"),
        template!("application/command/base.go" => "ddd/command.go"),
        template!("application/query/base.go" => "ddd/query.go"),
        template!("infrastructure/persistence/dynamodb.go" => "ddd/persistence.go"),
    ],
};
