//! Profile Codec - profiles to and from shareable `word-word-word` codes.
//!
//! Two paths decode a code. Preset codes map straight to hand-authored
//! profiles. Any other code is parsed into a [`PartialProfile`] of three
//! fields and a canonical full profile is reconstructed from those. The
//! codec is lossy: seven of the ten fields never travel in a code.

mod code;
mod engine;
mod presets;
mod reconstruct;
mod share;
mod word_banks;

pub use code::{ProfileCode, TOKEN_COUNT};
pub use engine::{
    decode, describe, describe_profile, encode, preset_codes, verify_tables, PresetSummary,
    UNKNOWN_PROFILE,
};
pub use presets::{is_preset, preset, preset_for_profile, Preset, PRESETS};
pub use reconstruct::{parse_tokens, PartialProfile};
pub use share::{code_from_url, share_url, strip_profile_param, PROFILE_QUERY_PARAM};
pub use word_banks::{WordBank, CHALLENGE_BANK, INTERFACE_BANK, STYLE_BANK, WORDS_PER_VALUE};
