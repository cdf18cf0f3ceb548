//! Hand-assembled archives for tests.

use crate::formats::ArchiveFormat;

pub const LHD_PASSWORD: u16 = 0x0004;
pub const LHD_LARGE: u16 = 0x0100;
pub const LHD_UNICODE: u16 = 0x0200;

/// One RAR4 file header plus payload.
pub struct Rar4File<'a> {
    pub flags: u16,
    pub name: &'a [u8],
    pub method: u8,
    pub data: &'a [u8],
    pub unpacked_size: u64,
    pub attributes: u32,
}

impl<'a> Rar4File<'a> {
    pub fn stored(name: &'a str, data: &'a [u8]) -> Self {
        Self {
            flags: 0,
            name: name.as_bytes(),
            method: 0x30,
            data,
            unpacked_size: data.len() as u64,
            attributes: 0x20,
        }
    }

    /// Serialize header and payload. Packed size is the payload length.
    pub fn encode(&self) -> Vec<u8> {
        let flags = self.flags | 0x8000;
        let large = flags & LHD_LARGE != 0;
        let head_size = 32 + if large { 8 } else { 0 } + self.name.len();
        let packed = self.data.len() as u64;

        let mut out = Vec::with_capacity(head_size + self.data.len());
        out.extend_from_slice(&[0x00, 0x00, 0x74]);
        out.extend_from_slice(&flags.to_le_bytes());
        out.extend_from_slice(&(head_size as u16).to_le_bytes());
        out.extend_from_slice(&(packed as u32).to_le_bytes());
        out.extend_from_slice(&(self.unpacked_size as u32).to_le_bytes());
        out.push(2); // host OS: Windows
        out.extend_from_slice(&0u32.to_le_bytes()); // file CRC
        out.extend_from_slice(&((0x5022u32 << 16) | 0x1883).to_le_bytes()); // 2020-01-02 03:04:06
        out.push(29);
        out.push(self.method);
        out.extend_from_slice(&(self.name.len() as u16).to_le_bytes());
        out.extend_from_slice(&self.attributes.to_le_bytes());
        if large {
            out.extend_from_slice(&((packed >> 32) as u32).to_le_bytes());
            out.extend_from_slice(&((self.unpacked_size >> 32) as u32).to_le_bytes());
        }
        out.extend_from_slice(self.name);
        out.extend_from_slice(self.data);
        out
    }
}

/// Builds RAR4 archives: signature, main header, blocks.
pub struct Rar4Builder {
    buf: Vec<u8>,
}

impl Rar4Builder {
    pub fn new() -> Self {
        Self::with_main_flags(0)
    }

    pub fn with_main_flags(flags: u16) -> Self {
        let mut buf = ArchiveFormat::RAR4_SIGNATURE.to_vec();
        buf.extend_from_slice(&[0x00, 0x00, 0x73]);
        buf.extend_from_slice(&flags.to_le_bytes());
        buf.extend_from_slice(&13u16.to_le_bytes());
        buf.extend_from_slice(&[0; 6]);
        Self { buf }
    }

    pub fn file(mut self, file: &Rar4File<'_>) -> Self {
        self.buf.extend_from_slice(&file.encode());
        self
    }

    pub fn stored(self, name: &str, data: &[u8]) -> Self {
        self.file(&Rar4File::stored(name, data))
    }

    pub fn compressed(self, name: &str, method: u8, packed: &[u8], unpacked_size: u64) -> Self {
        self.file(&Rar4File {
            method,
            unpacked_size,
            ..Rar4File::stored(name, packed)
        })
    }

    pub fn directory(self, name: &str) -> Self {
        self.file(&Rar4File {
            attributes: 0x10,
            ..Rar4File::stored(name, b"")
        })
    }

    pub fn encrypted(self, name: &str, packed: &[u8]) -> Self {
        self.file(&Rar4File {
            flags: LHD_PASSWORD,
            method: 0x33,
            ..Rar4File::stored(name, packed)
        })
    }

    /// A block of an unhandled type with a `LONG_BLOCK` payload.
    pub fn sub_block(mut self, payload: &[u8]) -> Self {
        self.buf.extend_from_slice(&[0x00, 0x00, 0x7A]);
        self.buf.extend_from_slice(&0x8000u16.to_le_bytes());
        self.buf.extend_from_slice(&11u16.to_le_bytes());
        self.buf.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        self.buf.extend_from_slice(payload);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn end(mut self) -> Self {
        self.buf.extend_from_slice(&[0xC4, 0x3D, 0x7B, 0x00, 0x40, 0x07, 0x00]);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

pub fn encode_vint(mut value: u64, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// One RAR5 file header plus payload.
pub struct Rar5File<'a> {
    pub name: &'a [u8],
    pub file_flags: u64,
    pub method: u8,
    pub data: Option<&'a [u8]>,
    pub unpacked_size: u64,
    pub mtime: Option<u32>,
    pub extra: &'a [u8],
}

impl<'a> Rar5File<'a> {
    pub fn stored(name: &'a str, data: &'a [u8]) -> Self {
        Self {
            name: name.as_bytes(),
            file_flags: 0,
            method: 0,
            data: Some(data),
            unpacked_size: data.len() as u64,
            mtime: None,
            extra: &[],
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut fields = Vec::new();
        let file_flags = self.file_flags | if self.mtime.is_some() { 0x02 } else { 0 };
        encode_vint(file_flags, &mut fields);
        encode_vint(self.unpacked_size, &mut fields);
        encode_vint(0x20, &mut fields);
        if let Some(mtime) = self.mtime {
            fields.extend_from_slice(&mtime.to_le_bytes());
        }
        encode_vint(u64::from(self.method) << 7, &mut fields);
        encode_vint(1, &mut fields); // host OS: Unix
        encode_vint(self.name.len() as u64, &mut fields);
        fields.extend_from_slice(self.name);

        let mut flags = 0u64;
        if !self.extra.is_empty() {
            flags |= 0x01;
        }
        if self.data.is_some() {
            flags |= 0x02;
        }
        let mut content = Vec::new();
        encode_vint(2, &mut content);
        encode_vint(flags, &mut content);
        if !self.extra.is_empty() {
            encode_vint(self.extra.len() as u64, &mut content);
        }
        if let Some(data) = self.data {
            encode_vint(data.len() as u64, &mut content);
        }
        content.extend_from_slice(&fields);
        content.extend_from_slice(self.extra);

        let mut out = vec![0, 0, 0, 0];
        encode_vint(content.len() as u64, &mut out);
        out.extend_from_slice(&content);
        if let Some(data) = self.data {
            out.extend_from_slice(data);
        }
        out
    }
}

/// Builds RAR5 archives: signature, main header, headers.
pub struct Rar5Builder {
    buf: Vec<u8>,
}

impl Rar5Builder {
    pub fn new() -> Self {
        let mut buf = ArchiveFormat::RAR5_SIGNATURE.to_vec();
        // main header: type 1, flags 0, archive flags 0
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x03, 0x01, 0x00, 0x00]);
        Self { buf }
    }

    pub fn file(mut self, file: &Rar5File<'_>) -> Self {
        self.buf.extend_from_slice(&file.encode());
        self
    }

    pub fn stored(self, name: &str, data: &[u8]) -> Self {
        self.file(&Rar5File::stored(name, data))
    }

    pub fn compressed(self, name: &str, method: u8, packed: &[u8], unpacked_size: u64) -> Self {
        self.file(&Rar5File {
            method,
            unpacked_size,
            ..Rar5File::stored(name, packed)
        })
    }

    pub fn directory(self, name: &str) -> Self {
        self.file(&Rar5File {
            file_flags: 0x01,
            data: None,
            ..Rar5File::stored(name, b"")
        })
    }

    /// File whose extra area carries an encryption record.
    pub fn encrypted(self, name: &str, packed: &[u8]) -> Self {
        self.file(&Rar5File {
            method: 3,
            extra: &[0x03, 0x01, 0x00, 0x00],
            ..Rar5File::stored(name, packed)
        })
    }

    /// Service header (type 3) with a data area.
    pub fn service(mut self, data: &[u8]) -> Self {
        let mut content = vec![0x03, 0x02];
        encode_vint(data.len() as u64, &mut content);
        content.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x03]);
        content.extend_from_slice(b"CMT");
        self.buf.extend_from_slice(&[0, 0, 0, 0]);
        encode_vint(content.len() as u64, &mut self.buf);
        self.buf.extend_from_slice(&content);
        self.buf.extend_from_slice(data);
        self
    }

    /// Archive encryption header (type 4).
    pub fn encryption_header(mut self) -> Self {
        self.buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x03, 0x04, 0x00, 0x00]);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn end(mut self) -> Self {
        self.buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x03, 0x05, 0x00, 0x00]);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}
