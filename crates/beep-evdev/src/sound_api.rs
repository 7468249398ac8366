//! The two `EV_SND` flavours a device can offer.
//!
//! `SND_TONE` carries a frequency and is preferred; `SND_BELL` is plain
//! on/off and only used when tone support is missing.

use enum_dispatch::enum_dispatch;

use crate::event::{SoundEvent, SND_BELL, SND_TONE};

#[enum_dispatch]
pub trait SoundApi {
    fn name(&self) -> &'static str;
    fn begin_event(&self, frequency: u16) -> SoundEvent;
    fn end_event(&self) -> SoundEvent;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToneProtocol;

impl SoundApi for ToneProtocol {
    fn name(&self) -> &'static str {
        "SND_TONE"
    }

    fn begin_event(&self, frequency: u16) -> SoundEvent {
        SoundEvent::new(SND_TONE, i32::from(frequency))
    }

    fn end_event(&self) -> SoundEvent {
        SoundEvent::new(SND_TONE, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BellProtocol;

impl SoundApi for BellProtocol {
    fn name(&self) -> &'static str {
        "SND_BELL"
    }

    // no frequency control on a bell
    fn begin_event(&self, _frequency: u16) -> SoundEvent {
        SoundEvent::new(SND_BELL, 1)
    }

    fn end_event(&self) -> SoundEvent {
        SoundEvent::new(SND_BELL, 0)
    }
}

#[enum_dispatch(SoundApi)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    ToneProtocol,
    BellProtocol,
}

impl Protocol {
    /// Pick a protocol from an `EVIOCGBIT(EV_SND)` bitmask. Tone wins over
    /// bell.
    pub fn select(capabilities: u64) -> Option<Self> {
        if capabilities & (1 << SND_TONE) != 0 {
            Some(ToneProtocol.into())
        } else if capabilities & (1 << SND_BELL) != 0 {
            Some(BellProtocol.into())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TONE_BIT: u64 = 1 << SND_TONE;
    const BELL_BIT: u64 = 1 << SND_BELL;

    #[test]
    fn test_tone_preferred_over_bell() {
        assert_eq!(
            Protocol::select(TONE_BIT | BELL_BIT),
            Some(Protocol::ToneProtocol(ToneProtocol))
        );
    }

    #[test]
    fn test_bell_fallback() {
        assert_eq!(
            Protocol::select(BELL_BIT),
            Some(Protocol::BellProtocol(BellProtocol))
        );
    }

    #[test]
    fn test_unrelated_bits_select_nothing() {
        assert_eq!(Protocol::select(0), None);
        // SND_CLICK only
        assert_eq!(Protocol::select(1 << 0), None);
    }

    #[test]
    fn test_dispatch_through_enum() {
        let tone: Protocol = ToneProtocol.into();
        assert_eq!(tone.name(), "SND_TONE");
        assert_eq!(tone.begin_event(0), SoundEvent::new(SND_TONE, 0));
        assert_eq!(tone.begin_event(u16::MAX), SoundEvent::new(SND_TONE, 65535));

        let bell: Protocol = BellProtocol.into();
        assert_eq!(bell.begin_event(880), SoundEvent::new(SND_BELL, 1));
        assert_eq!(bell.end_event(), SoundEvent::new(SND_BELL, 0));
    }
}
