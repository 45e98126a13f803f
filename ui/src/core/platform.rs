//! Platform detection helpers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Native => "native",
        }
    }
}
