// crates/domain/src/listing/long_format.rs
use chrono::{DateTime, Datelike, Local};
use lswc_shared_kernel::{EntryKind, EntryMetadata};

use super::permission::format_permissions;

pub fn kind_glyph(kind: EntryKind) -> char {
    match kind {
        EntryKind::RegularFile => '-',
        EntryKind::Directory => 'd',
        EntryKind::SymbolicLink => 'l',
        EntryKind::Other => '?',
    }
}

/// `"{day:>2} {month:>3} {HH:MM} "`, month numeric, trailing space included.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    format!("{:>2} {:>3} {} ", at.day(), at.month(), at.format("%H:%M"))
}

/// Header line of the long listing.
pub fn format_total(blocks: u64) -> String {
    format!(" total {blocks}")
}

/// One long-listing line, without the trailing newline.
///
/// `owner` and `group` are already resolved (or fell back to numeric ids).
/// Names that are not valid UTF-8 are shown with replacement characters.
pub fn format_long_line(meta: &EntryMetadata, owner: &str, group: &str) -> String {
    format!(
        "{}{}{:>3} {} {} {:>5} {}{}",
        kind_glyph(meta.kind()),
        format_permissions(meta.permission_mode()),
        meta.link_count(),
        owner,
        group,
        meta.size_bytes(),
        format_timestamp(&meta.modified_at()),
        meta.name().to_string_lossy()
    )
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsString, os::unix::ffi::OsStringExt};

    use chrono::TimeZone;
    use lswc_shared_kernel::EntryMetadataBuilder;

    use super::*;

    fn at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, month, day, hour, minute, 0).single().expect("unambiguous local time")
    }

    fn snapshot(name: impl Into<OsString>, kind: EntryKind) -> EntryMetadataBuilder {
        let mut builder = EntryMetadata::builder();
        builder.name(name).kind(kind).owner_id(0).group_id(0);
        builder
    }

    #[test]
    fn glyphs_cover_every_kind() {
        assert_eq!(kind_glyph(EntryKind::RegularFile), '-');
        assert_eq!(kind_glyph(EntryKind::Directory), 'd');
        assert_eq!(kind_glyph(EntryKind::SymbolicLink), 'l');
        assert_eq!(kind_glyph(EntryKind::Other), '?');
    }

    #[test]
    fn timestamp_is_day_month_time() {
        assert_eq!(format_timestamp(&at(3, 7, 9, 5)), " 7   3 09:05 ");
        assert_eq!(format_timestamp(&at(12, 25, 23, 59)), "25  12 23:59 ");
    }

    #[test]
    fn total_line_has_leading_space() {
        assert_eq!(format_total(8 + 16), " total 24");
    }

    #[test]
    fn long_line_layout() {
        let meta = snapshot("notes.txt", EntryKind::RegularFile)
            .permission_mode(0o644)
            .link_count(1)
            .size_bytes(1234)
            .modified_at(at(6, 1, 14, 30))
            .build()
            .expect("complete snapshot");

        assert_eq!(format_long_line(&meta, "alice", "staff"), "-rw-r--r--  1 alice staff  1234  1   6 14:30 notes.txt");
    }

    #[test]
    fn wide_fields_are_not_truncated() {
        let meta = snapshot("big", EntryKind::Directory)
            .permission_mode(0o755)
            .link_count(1200)
            .size_bytes(123_456)
            .modified_at(at(1, 15, 0, 0))
            .build()
            .expect("complete snapshot");

        assert_eq!(format_long_line(&meta, "1001", "1001"), "drwxr-xr-x1200 1001 1001 123456 15   1 00:00 big");
    }

    #[test]
    fn non_utf8_name_is_rendered_lossily() {
        let meta = snapshot(OsString::from_vec(b"caf\xe9.txt".to_vec()), EntryKind::RegularFile)
            .permission_mode(0o644)
            .modified_at(at(6, 1, 14, 30))
            .build()
            .expect("complete snapshot");

        assert!(format_long_line(&meta, "0", "0").ends_with(" caf\u{FFFD}.txt"));
    }
}
