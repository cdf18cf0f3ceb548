//! RAR format detection and timestamps.
//!
//! Zero dependencies.

/// Result of signature detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// RAR 1.5 to 4.x
    Rar4,
    /// RAR 5.0+
    Rar5,
    /// Neither signature matched.
    NotRar,
}

impl ArchiveFormat {
    pub const RAR4_SIGNATURE: &'static [u8; 7] = b"Rar!\x1a\x07\x00";
    pub const RAR5_SIGNATURE: &'static [u8; 8] = b"Rar!\x1a\x07\x01\x00";

    /// Classify a buffer by its leading bytes.
    ///
    /// The 8-byte RAR5 signature is checked first; the seventh byte
    /// (`0x00` vs `0x01`) is what tells the two versions apart.
    pub fn detect(data: &[u8]) -> Self {
        if data.starts_with(Self::RAR5_SIGNATURE) {
            Self::Rar5
        } else if data.starts_with(Self::RAR4_SIGNATURE) {
            Self::Rar4
        } else {
            Self::NotRar
        }
    }

    /// Number of signature bytes preceding the first header.
    pub fn signature_len(&self) -> usize {
        match self {
            Self::Rar4 => 7,
            Self::Rar5 => 8,
            Self::NotRar => 0,
        }
    }

    pub fn is_rar(&self) -> bool {
        !matches!(self, Self::NotRar)
    }
}

/// Classify a buffer as RAR4, RAR5 or not a RAR archive. Never fails.
pub fn detect(data: &[u8]) -> ArchiveFormat {
    ArchiveFormat::detect(data)
}

/// Raw timestamp value (Unix nanoseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct RawTimestamp {
    pub nanos: i64,
}

impl RawTimestamp {
    pub fn from_unix_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// RAR5 stores modification time as 32-bit Unix seconds.
    pub fn from_unix_secs(secs: u32) -> Self {
        Self {
            nanos: i64::from(secs) * 1_000_000_000,
        }
    }

    /// RAR4 stores modification time as an MS-DOS date/time pair (local time).
    pub fn from_dos(dos_time: u32) -> Self {
        let second = ((dos_time & 0x1f) * 2) as i64;
        let minute = ((dos_time >> 5) & 0x3f) as i64;
        let hour = ((dos_time >> 11) & 0x1f) as i64;
        let day = ((dos_time >> 16) & 0x1f) as i64;
        let month = ((dos_time >> 21) & 0x0f) as i64;
        let year = ((dos_time >> 25) + 1980) as i64;

        let mut days: i64 = 0;
        for y in 1970..year {
            days += if is_leap_year(y) { 366 } else { 365 };
        }
        let month_days = [
            31,
            if is_leap_year(year) { 29 } else { 28 },
            31,
            30,
            31,
            30,
            31,
            31,
            30,
            31,
            30,
            31,
        ];
        // Month and day are 1-based; zero means a blank field.
        for len in month_days.iter().take((month.max(1) - 1).min(11) as usize) {
            days += len;
        }
        days += day.max(1) - 1;

        let secs = days * 86400 + hour * 3600 + minute * 60 + second;
        Self {
            nanos: secs * 1_000_000_000,
        }
    }

    pub fn unix_secs(&self) -> i64 {
        self.nanos.div_euclid(1_000_000_000)
    }
}

fn is_leap_year(y: i64) -> bool {
    y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}
