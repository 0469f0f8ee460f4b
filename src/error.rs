use thiserror::Error;

use crate::parse::Slot;

pub type XfillResult<T> = Result<T, XfillError>;

#[derive(Error, Debug)]
pub enum XfillError {
    #[error("structure template contains no cells")]
    EmptyGrid,
    #[error("slot {slot} extends outside the {width}x{height} grid")]
    SlotOutOfBounds {
        slot: Slot,
        width: usize,
        height: usize,
    },
    #[error("slot {slot} crosses a blocked cell")]
    SlotBlocked { slot: Slot },
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
}
