use crate::core::probe::types::BoardInfo;
use crate::error::Result;
use crate::platform;

pub fn collect() -> Result<BoardInfo> {
    platform::read_board_info()
}
