//! Field names accepted by the `fields` query parameter and used in request bodies.

pub const AUTO_ADD_MUSIC: &str = "auto_add_music";
pub const AVATAR_LARGE_URL: &str = "avatar_large_url";
pub const AVATAR_URL: &str = "avatar_url";
pub const AVATAR_URL_100: &str = "avatar_url_100";
pub const BIO_DESCRIPTION: &str = "bio_description";
pub const BRAND_CONTENT_TOGGLE: &str = "brand_content_toggle";
pub const BRAND_ORGANIC_TOGGLE: &str = "brand_organic_toggle";
pub const CHUNK_SIZE: &str = "chunk_size";
pub const COMMENT_COUNT: &str = "comment_count";
pub const COVER_IMAGE_URL: &str = "cover_image_url";
pub const CREATE_TIME: &str = "create_time";
pub const DESCRIPTION: &str = "description";
pub const DISABLE_COMMENT: &str = "disable_comment";
pub const DISABLE_DUET: &str = "disable_duet";
pub const DISABLE_STITCH: &str = "disable_stitch";
pub const DISPLAY_NAME: &str = "display_name";
pub const DURATION: &str = "duration";
pub const EMBED_HTML: &str = "embed_html";
pub const EMBED_LINK: &str = "embed_link";
pub const FOLLOWER_COUNT: &str = "follower_count";
pub const FOLLOWING_COUNT: &str = "following_count";
pub const HEIGHT: &str = "height";
pub const ID: &str = "id";
pub const IS_AIGC: &str = "is_aigc";
pub const IS_VERIFIED: &str = "is_verified";
pub const LIKE_COUNT: &str = "like_count";
pub const LIKES_COUNT: &str = "likes_count";
pub const MEDIA_TYPE: &str = "media_type";
pub const OPEN_ID: &str = "open_id";
pub const PHOTO_COVER_INDEX: &str = "photo_cover_index";
pub const PHOTO_IMAGES: &str = "photo_images";
pub const POST_INFO: &str = "post_info";
pub const POST_MODE: &str = "post_mode";
pub const PRIVACY_LEVEL: &str = "privacy_level";
pub const PROFILE_DEEP_LINK: &str = "profile_deep_link";
pub const PUBLISH_ID: &str = "publish_id";
pub const SHARE_COUNT: &str = "share_count";
pub const SHARE_URL: &str = "share_url";
pub const SOURCE: &str = "source";
pub const SOURCE_INFO: &str = "source_info";
pub const TITLE: &str = "title";
pub const TOTAL_CHUNK_COUNT: &str = "total_chunk_count";
pub const UNION_ID: &str = "union_id";
pub const UPLOAD_URL: &str = "upload_url";
pub const VIDEO_COUNT: &str = "video_count";
pub const VIDEO_COVER_TIMESTAMP_MS: &str = "video_cover_timestamp_ms";
pub const VIDEO_DESCRIPTION: &str = "video_description";
pub const VIDEO_URL: &str = "video_url";
pub const VIDEO_SIZE: &str = "video_size";
pub const VIEW_COUNT: &str = "view_count";
pub const WIDTH: &str = "width";
