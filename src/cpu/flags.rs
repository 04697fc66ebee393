use bitflags::bitflags;

bitflags! {
    /// Which flag bits a `set_flags` call should copy from an `AluResult`.
    ///
    /// Replaces the reference implementation's format-string mask
    /// (`set_flags("znhc", result)`) with a small bitset.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FlagMask: u8 {
        const Z = 0b0001;
        const N = 0b0010;
        const H = 0b0100;
        const C = 0b1000;
    }
}
