// crates/fir1d-cli/src/io/vector_file.rs

use anyhow::{bail, Context, Result};

const MAGIC: &[u8; 4] = b"FV1\0";
const VERSION: u16 = 1;

const DTYPE_U8: u8 = 0;
const DTYPE_F64: u8 = 1;

/// Row-major 2-D array payload. U8 holds fixed-engine pixels, F64 holds
/// ideal-engine baselines.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    U8(Vec<u8>),
    F64(Vec<f64>),
}

impl Payload {
    pub fn len(&self) -> usize {
        match self {
            Payload::U8(v) => v.len(),
            Payload::F64(v) => v.len(),
        }
    }

    pub fn dtype_tag(&self) -> &'static str {
        match self {
            Payload::U8(_) => "u8",
            Payload::F64(_) => "f64",
        }
    }
}

/// On-disk vector/image array.
///
/// Layout (little-endian):
/// MAGIC[4] version:u16 dtype:u8 rows:u32 cols:u32
/// payload (rows*cols elements; u8 raw or f64 bit patterns)
/// crc32:u32 (over everything before crc32)
#[derive(Clone, Debug, PartialEq)]
pub struct VectorFile {
    pub rows: u32,
    pub cols: u32,
    pub payload: Payload,
}

impl VectorFile {
    pub fn new(rows: u32, cols: u32, payload: Payload) -> Result<VectorFile> {
        let expected = rows as usize * cols as usize;
        if payload.len() != expected {
            bail!(
                "payload length {} does not match rows*cols = {}",
                payload.len(),
                expected
            );
        }
        Ok(VectorFile {
            rows,
            cols,
            payload,
        })
    }

    /// Row `r` of a u8 payload.
    pub fn row_u8(&self, r: usize) -> Option<&[u8]> {
        match &self.payload {
            Payload::U8(v) => {
                let w = self.cols as usize;
                v.get(r * w..(r + 1) * w)
            }
            Payload::F64(_) => None,
        }
    }
}

pub fn encode(v: &VectorFile) -> Vec<u8> {
    let mut b = Vec::with_capacity(16 + v.payload.len() * 8);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&VERSION.to_le_bytes());
    match &v.payload {
        Payload::U8(_) => b.push(DTYPE_U8),
        Payload::F64(_) => b.push(DTYPE_F64),
    }
    b.extend_from_slice(&v.rows.to_le_bytes());
    b.extend_from_slice(&v.cols.to_le_bytes());
    match &v.payload {
        Payload::U8(data) => b.extend_from_slice(data),
        Payload::F64(data) => {
            for x in data {
                b.extend_from_slice(&x.to_le_bytes());
            }
        }
    }
    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());
    b
}

pub fn decode(bytes: &[u8]) -> Result<VectorFile> {
    if bytes.len() < 19 {
        bail!("vector file too short ({} bytes)", bytes.len());
    }
    if &bytes[0..4] != MAGIC {
        bail!("bad magic");
    }

    let body = &bytes[..bytes.len() - 4];
    let stored = u32::from_le_bytes(bytes[bytes.len() - 4..].try_into().unwrap());
    let actual = crc32(body);
    if stored != actual {
        bail!("crc mismatch: stored={stored:08x} actual={actual:08x}");
    }

    let version = u16::from_le_bytes(bytes[4..6].try_into().unwrap());
    if version != VERSION {
        bail!("unsupported vector file version {version}");
    }
    let dtype = bytes[6];
    let rows = u32::from_le_bytes(bytes[7..11].try_into().unwrap());
    let cols = u32::from_le_bytes(bytes[11..15].try_into().unwrap());
    let count = rows as usize * cols as usize;
    let data = &body[15..];

    let payload = match dtype {
        DTYPE_U8 => {
            if data.len() != count {
                bail!("u8 payload size {} != rows*cols {}", data.len(), count);
            }
            Payload::U8(data.to_vec())
        }
        DTYPE_F64 => {
            if data.len() != count * 8 {
                bail!("f64 payload size {} != rows*cols*8 {}", data.len(), count * 8);
            }
            let mut v = Vec::with_capacity(count);
            for chunk in data.chunks_exact(8) {
                v.push(f64::from_le_bytes(chunk.try_into().unwrap()));
            }
            Payload::F64(v)
        }
        other => bail!("unknown dtype tag {other}"),
    };

    VectorFile::new(rows, cols, payload)
}

pub fn load(path: &str) -> Result<VectorFile> {
    let bytes = std::fs::read(path).with_context(|| format!("read vector file {path}"))?;
    decode(&bytes).with_context(|| format!("decode vector file {path}"))
}

pub fn save(path: &str, v: &VectorFile) -> Result<()> {
    std::fs::write(path, encode(v)).with_context(|| format!("write vector file {path}"))
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_round_trip() {
        let v = VectorFile::new(2, 3, Payload::U8(vec![0, 1, 2, 253, 254, 255])).unwrap();
        let got = decode(&encode(&v)).unwrap();
        assert_eq!(got, v);
        assert_eq!(got.row_u8(1), Some(&[253u8, 254, 255][..]));
    }

    #[test]
    fn f64_round_trip() {
        let v = VectorFile::new(1, 4, Payload::F64(vec![-12.0, 27.5, 282.625, 0.0])).unwrap();
        assert_eq!(decode(&encode(&v)).unwrap(), v);
    }

    #[test]
    fn corrupted_payload_fails_crc() {
        let v = VectorFile::new(1, 4, Payload::U8(vec![9, 9, 9, 9])).unwrap();
        let mut bytes = encode(&v);
        bytes[16] ^= 0x40;
        let err = decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("crc mismatch"), "{err}");
    }

    #[test]
    fn shape_payload_mismatch_rejected() {
        assert!(VectorFile::new(2, 3, Payload::U8(vec![0; 5])).is_err());
    }

    #[test]
    fn save_load_via_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case_x_u8.fv");
        let path = path.to_string_lossy().into_owned();

        let v = VectorFile::new(2, 2, Payload::U8(vec![10, 20, 30, 40])).unwrap();
        save(&path, &v).unwrap();
        assert_eq!(load(&path).unwrap(), v);
    }
}
