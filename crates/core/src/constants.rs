//! Constants used throughout the dubbing core crate.
//!
//! The literal values mirror the script format used by the production team, so the
//! export header and sheet title must not be translated or reordered.

/// Canonical character marking the end of a shot.
pub const SENTENCE_DELIMITER: char = '。';

/// Marker used by older scripts in place of [`SENTENCE_DELIMITER`].
pub const LEGACY_MARKER: char = '^';

/// Speaker assigned to rows without an explicit speaker.
pub const NARRATOR: &str = "旁白";

/// Default 0-based column holding the speaker label.
pub const DEFAULT_SPEAKER_COLUMN: usize = 1;

/// Default 0-based column holding the spoken text.
pub const DEFAULT_TEXT_COLUMN: usize = 7;

/// Separator between names in the role name input.
pub const ROLE_SEPARATOR: char = ',';

/// Inserted between the image and video prompt before role matching.
pub const PROMPT_JOINER: &str = " ";

/// Title of the exported worksheet.
pub const EXPORT_SHEET_NAME: &str = "镜头列表";

/// File name offered for the export when none is given.
pub const DEFAULT_EXPORT_FILENAME: &str = "镜头列表.xlsx";

/// Export header, in column order.
pub const EXPORT_HEADERS: [&str; 9] = [
    "镜头ID",
    "配音角色",
    "配音内容",
    "场景",
    "出场角色",
    "图片提示词",
    "视频提示词",
    "情感",
    "强度",
];

/// Default number of lines per chunk for [`crate::chunk_lines`].
pub const DEFAULT_LINES_PER_CHUNK: usize = 150;

/// Largest accepted chunk size for [`crate::chunk_lines`].
pub const MAX_LINES_PER_CHUNK: usize = 99_999;
