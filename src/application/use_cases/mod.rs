/// Use cases module containing application business logic orchestration
mod score_package;

pub use score_package::ScorePackageUseCase;
