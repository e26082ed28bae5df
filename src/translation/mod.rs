mod catalog;
mod gateway;
mod google;
mod openai;
mod prompt;

pub use catalog::{
    AUTO_CODE, AUTO_LABEL, CatalogError, LanguageCatalog, SUPPORTED_LANGUAGES, print_languages,
    validate_language,
};
pub use gateway::{BlockingGateway, GatewayClient, GatewayError, Translation, TranslationGateway};
pub use google::{DEFAULT_GOOGLE_ENDPOINT, GoogleClient};
pub use openai::OpenAiClient;
