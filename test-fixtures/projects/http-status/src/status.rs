pub enum Status {
    Ok,
    // Client errors
    NotFound,
    Forbidden,
    // Server errors
    InternalError,
}

impl Status {
    pub fn code(self) -> u32 {
        match self {
            // regen:begin codes
            Self::Ok => 0,
            Self::NotFound => 1,
            Self::Forbidden => 2,
            Self::InternalError => 3,
            // regen:end codes
        }
    }

    pub fn name_of(code: u32) -> Option<&'static str> {
        match code {
            // regen:begin names
            // regen:end names
            _ => None,
        }
    }
}
