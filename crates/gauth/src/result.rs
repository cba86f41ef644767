#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Error {
    IncorrectData {
        with: &'static str,
    },
    DatabaseError {
        operation: &'static str,
        with: &'static str,
    },
    InternalError,
    OperationFailed,

    UnknownUser,

    InvalidSecret,
    TotpDisabled,
    QrCodeUnavailable,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type Success = Result<()>;
