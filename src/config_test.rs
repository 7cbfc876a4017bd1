use super::*;

#[test]
fn default_mounts_into_app_element() {
    assert_eq!(AppConfig::default().mount_point_id, "app");
}

#[test]
fn default_toasts_top_right() {
    assert_eq!(AppConfig::default().toast.position, ToastPosition::TopRight);
}

#[test]
fn missing_api_base_means_same_origin() {
    assert_eq!(AppConfig::with_api_base(None).api_base, "");
}

#[test]
fn api_base_trims_whitespace_and_trailing_slashes() {
    let config = AppConfig::with_api_base(Some(" http://localhost:8000// "));
    assert_eq!(config.api_base, "http://localhost:8000");
    assert_eq!(config.mount_point_id, DEFAULT_MOUNT_POINT_ID);
}
