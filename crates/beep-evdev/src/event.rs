//! Sound event records as the kernel expects them on `write(2)`.

use std::mem::size_of;

pub const EV_SND: u16 = 0x12;
pub const SND_BELL: u16 = 0x01;
pub const SND_TONE: u16 = 0x02;

/// Size of `struct input_event` on this platform.
pub const EVENT_SIZE: usize = size_of::<libc::input_event>();

const TIME_SIZE: usize = size_of::<libc::timeval>();
const TYPE_OFFSET: usize = TIME_SIZE;
const CODE_OFFSET: usize = TYPE_OFFSET + 2;
const VALUE_OFFSET: usize = CODE_OFFSET + 2;

// timestamp, then u16 type, u16 code, i32 value with no padding
const _: () = assert!(EVENT_SIZE == VALUE_OFFSET + 4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundEvent {
    pub code: u16,
    pub value: i32,
}

impl SoundEvent {
    pub const fn new(code: u16, value: i32) -> Self {
        Self { code, value }
    }

    /// Encode as a native-endian `input_event` with a zero timestamp.
    pub fn to_bytes(&self) -> [u8; EVENT_SIZE] {
        let mut buf = [0u8; EVENT_SIZE];
        buf[TYPE_OFFSET..CODE_OFFSET].copy_from_slice(&EV_SND.to_ne_bytes());
        buf[CODE_OFFSET..VALUE_OFFSET].copy_from_slice(&self.code.to_ne_bytes());
        buf[VALUE_OFFSET..].copy_from_slice(&self.value.to_ne_bytes());
        buf
    }

    /// Decode a record, returning `None` unless it is an `EV_SND` event of
    /// exactly `EVENT_SIZE` bytes.
    #[cfg(test)]
    pub(crate) fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() != EVENT_SIZE {
            return None;
        }
        let ty = u16::from_ne_bytes([buf[TYPE_OFFSET], buf[TYPE_OFFSET + 1]]);
        if ty != EV_SND {
            return None;
        }
        let code = u16::from_ne_bytes([buf[CODE_OFFSET], buf[CODE_OFFSET + 1]]);
        let value = i32::from_ne_bytes([
            buf[VALUE_OFFSET],
            buf[VALUE_OFFSET + 1],
            buf[VALUE_OFFSET + 2],
            buf[VALUE_OFFSET + 3],
        ]);
        Some(Self { code, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_kernel_struct() {
        let bytes = SoundEvent::new(SND_TONE, 440).to_bytes();

        let mut raw: libc::input_event = unsafe { std::mem::zeroed() };
        raw.type_ = EV_SND;
        raw.code = SND_TONE;
        raw.value = 440;
        let expected = unsafe {
            std::slice::from_raw_parts(&raw as *const libc::input_event as *const u8, EVENT_SIZE)
        };

        assert_eq!(&bytes[..], expected);
    }

    #[test]
    fn test_timestamp_is_zero() {
        let bytes = SoundEvent::new(SND_BELL, 1).to_bytes();
        assert!(bytes[..TIME_SIZE].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_decode_rejects_foreign_records() {
        let bytes = SoundEvent::new(SND_BELL, 1).to_bytes();
        assert_eq!(SoundEvent::from_bytes(&bytes[1..]), None);

        let mut other = bytes;
        other[TYPE_OFFSET] = 0x01; // EV_KEY
        other[TYPE_OFFSET + 1] = 0x00;
        assert_eq!(SoundEvent::from_bytes(&other), None);
    }
}
