use super::TemplateEntry;

const OPENAPI: TemplateEntry = template!("docs/openapi.yaml" => "features/openapi.yaml");

pub(super) const CLEAN_API: &[TemplateEntry] = &[
    template!("internal/interfaces/api/router.go" => "clean/features/api_router.go"),
    template!("internal/interfaces/api/handlers.go" => "clean/features/api_handlers.go"),
    template!("internal/interfaces/api/middleware.go" => "clean/features/api_middleware.go"),
    template!("internal/interfaces/api/responses.go" => "clean/features/api_responses.go"),
    OPENAPI,
];

pub(super) const SIMPLE_API: &[TemplateEntry] = &[
    template!("handlers/api.go" => "simple/features/api_handler.go"),
    template!("models/api_models.go" => "simple/features/api_models.go"),
    template!("utils/api_utils.go" => "simple/features/api_utils.go"),
    OPENAPI,
];

pub(super) const DDD_API: &[TemplateEntry] = &[
    template!("interfaces/api/router.go" => "ddd/features/api_router.go"),
    template!("interfaces/api/handlers.go" => "ddd/features/api_handlers.go"),
    template!("application/handler/api_handler.go" => "ddd/features/api_application_handler.go"),
    OPENAPI,
];

pub(super) const CLEAN_DYNAMODB: &[TemplateEntry] = &[
    template!("internal/infrastructure/database/dynamodb.go" => "clean/features/dynamodb_client.go"),
    template!("internal/infrastructure/database/repository.go" => "clean/features/dynamodb_repository.go"),
    template!("internal/domain/repositories/user_repository.go" => "clean/features/user_repository.go"),
];

pub(super) const SIMPLE_DYNAMODB: &[TemplateEntry] = &[
    template!("services/dynamodb.go" => "simple/features/dynamodb_service.go"),
    template!("models/dynamo_models.go" => "simple/features/dynamodb_models.go"),
];

pub(super) const DDD_DYNAMODB: &[TemplateEntry] = &[
    template!("infrastructure/persistence/dynamodb_repository.go" => "ddd/features/dynamodb_repository.go"),
    template!("domain/repository/user_repository.go" => "ddd/features/user_repository.go"),
];

pub(super) const CLEAN_SQS: &[TemplateEntry] = &[
    template!("internal/infrastructure/aws/sqs.go" => "clean/features/sqs_client.go"),
    template!("internal/interfaces/lambda/sqs_handler.go" => "clean/features/sqs_handler.go"),
    template!("internal/usecases/process_message.go" => "clean/features/process_message.go"),
];

pub(super) const SIMPLE_SQS: &[TemplateEntry] = &[
    template!("handlers/sqs.go" => "simple/features/sqs_handler.go"),
    template!("services/sqs.go" => "simple/features/sqs_service.go"),
    template!("models/sqs_models.go" => "simple/features/sqs_models.go"),
];

pub(super) const DDD_SQS: &[TemplateEntry] = &[
    template!("interfaces/lambda/sqs_handler.go" => "ddd/features/sqs_handler.go"),
    template!("infrastructure/messaging/sqs_client.go" => "ddd/features/sqs_client.go"),
    template!("application/handler/message_handler.go" => "ddd/features/message_handler.go"),
];
