// Line-terminator width detection.
//
// One global decision per file, taken over a bounded probe region: lines
// end in either LF (width 1) or CRLF (width 2). Mixed line endings are
// not corrected; a non-matching terminator byte simply surfaces during
// field splitting at the next scan.

/// Line feed byte (0x0A).
pub const LINE_FEED: u8 = b'\n';
/// Carriage return byte (0x0D).
pub const CARRIAGE_RETURN: u8 = b'\r';

/// Upper bound on the probe region mapped for detection (1 MiB).
pub const PROBE_LIMIT: u64 = 1024 * 1024;

/// Detect the terminator width over the probe bytes.
///
/// Scans forward for the first CR or LF. CR immediately followed by LF
/// (within the probe) is width 2; a lone CR or LF is width 1. A probe
/// with no terminator at all defaults to width 1, which degrades
/// gracefully for single-line files.
pub fn terminator_width(probe: &[u8]) -> usize {
    let mut offset = 0;
    while offset < probe.len() {
        match probe[offset] {
            CARRIAGE_RETURN => {
                if probe.get(offset + 1) == Some(&LINE_FEED) {
                    return 2;
                }
                return 1;
            }
            LINE_FEED => return 1,
            _ => offset += 1,
        }
    }
    1
}
