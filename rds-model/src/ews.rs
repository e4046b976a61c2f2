/// Emergency Warning System data, group 9A: opaque payload carried in
/// blocks B (low bits), C, and D. Interpretation of the warning content is
/// out of scope; this preserves the raw bits for a host to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ews {
    pub b: u16,
    pub c: u16,
    pub d: u16,
}
