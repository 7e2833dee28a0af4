pub type VizResult<T> = Result<T, VizError>;

#[derive(thiserror::Error, Debug)]
pub enum VizError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),

    #[error("unknown shader variant: {0:?}")]
    UnknownVariant(String),

    #[error("unknown reveal transition: {0:?}")]
    UnknownTransition(String),

    #[error("glyph error: {0}")]
    Glyph(String),

    #[error("tessellation error: {0}")]
    Tessellation(String),

    #[error("shader error: {0}")]
    Shader(String),

    #[error("asset error: {0}")]
    Asset(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("dom error: {0}")]
    Dom(String),

    #[error("theme store is not installed")]
    ThemeUnavailable,

    #[error("timer interval must be positive, got {0} ms")]
    InvalidInterval(f64),
}

impl VizError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn glyph(msg: impl Into<String>) -> Self {
        Self::Glyph(msg.into())
    }

    pub fn shader(msg: impl Into<String>) -> Self {
        Self::Shader(msg.into())
    }

    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }
}

impl From<serde_json::Error> for VizError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<VizError> for wasm_bindgen::JsValue {
    fn from(err: VizError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
