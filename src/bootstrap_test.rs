use super::*;

#[test]
fn missing_mount_point_names_the_element() {
    assert_eq!(MountError::MissingMountPoint("app".to_owned()).to_string(), "mount point #app not found");
}
