use crate::facts::ReadStatus;

/// Identifier of a badge icon asset.  Actual pixels live with the host's
/// icon-drawing collaborator; the engine only selects which one to blit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconId {
    Reading,
    Complete,
    CompleteMirrored,
    OnHold,
    OnHoldMirrored,
    Abandoned,
    AbandonedMirrored,
}

/// Pick the icon variant for `status` under the given UI direction.
///
/// Right-to-left layouts get mirrored assets; the reading glyph has no
/// mirrored asset and is rotated 180° instead.
pub fn status_icon(status: ReadStatus, rtl: bool) -> (IconId, f32) {
    match (status, rtl) {
        (ReadStatus::Reading, false) => (IconId::Reading, 0.0),
        (ReadStatus::Reading, true) => (IconId::Reading, 180.0),
        (ReadStatus::Complete, false) => (IconId::Complete, 0.0),
        (ReadStatus::Complete, true) => (IconId::CompleteMirrored, 0.0),
        (ReadStatus::OnHold, false) => (IconId::OnHold, 0.0),
        (ReadStatus::OnHold, true) => (IconId::OnHoldMirrored, 0.0),
        (ReadStatus::Abandoned, false) => (IconId::Abandoned, 0.0),
        (ReadStatus::Abandoned, true) => (IconId::AbandonedMirrored, 0.0),
    }
}
