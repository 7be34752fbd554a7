/// Use cases module containing application business logic orchestration
mod generate_credits;

pub use generate_credits::GenerateCreditsUseCase;
