//! Terminal front-end for Floor 13.

pub mod app_loop;
pub mod config;
pub mod journal_file;
pub mod seed;

/// Directory name used for the platform config and data folders.
pub const APP_NAME: &str = "Floor13";

/// Snapshot hashes are logged as `0x` plus 16 lowercase hex digits, the same
/// shape the replay tool prints, so the two can be compared by eye.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_hash_is_zero_padded() {
        assert_eq!(format_snapshot_hash(0x2a), "0x000000000000002a");
        assert_eq!(format_snapshot_hash(u64::MAX), "0xffffffffffffffff");
    }
}
