use thiserror::Error;

/// Failures of a cart mutation. The `Display` text of each variant is exactly
/// the message shown to the user through the `Notifier`; the storefront this
/// serves is Brazilian-Portuguese, hence the localized strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Erro na adição do produto")]
    ProductAddFailed,

    #[error("Quantidade solicitada fora de estoque")]
    OutOfStock,

    #[error("Erro na remoção do produto")]
    RemoveFailed,

    #[error("Erro na alteração de quantidade do produto")]
    UpdateFailed,

    #[error("Não é possível diminuir de 1 a quantidade do produto")]
    QuantityTooLow,

    /// Anything that is not a recognized validation failure; the message is
    /// shown to the user verbatim.
    #[error("{0}")]
    Unexpected(String),
}

/// Failures of a catalog lookup. `NotFound` is a first-class variant so the
/// cart logic can branch on it without inspecting transport error text.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("product not found in catalog")]
    NotFound,

    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected catalog response: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration problems, raised before any adapter is built.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CartError>;
