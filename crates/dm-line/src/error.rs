use dm_core::LineId;
use thiserror::Error;

use crate::Side;

/// Why a line operation was refused.
///
/// Every variant is a clean no-op: the engine's line is exactly as it was
/// before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LineError {
    #[error("no line on the {0} side")]
    NoLine(Side),

    #[error("`{op}` is not available on the {side} side")]
    WrongSide {
        op:   &'static str,
        side: Side,
    },

    #[error("line {0} is zero-length; its bearing is undefined")]
    ZeroLength(LineId),

    #[error("{0} map surface has no viewport center yet")]
    ViewportUnavailable(Side),
}

pub type LineResult<T> = Result<T, LineError>;
