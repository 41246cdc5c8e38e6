use std::fmt;

/// HTTP status of a board call. Only 200 counts as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiStatus(pub u16);

impl ApiStatus {
    pub const OK: ApiStatus = ApiStatus(200);
    pub const BAD_REQUEST: ApiStatus = ApiStatus(400);
    /// Reported when a card or list name could not be resolved locally.
    pub const NOT_FOUND: ApiStatus = ApiStatus(404);

    pub fn is_success(self) -> bool {
        self == Self::OK
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
