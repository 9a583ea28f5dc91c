/// Use cases module containing application business logic orchestration
mod convert_requirements;

pub use convert_requirements::ConvertRequirementsUseCase;
