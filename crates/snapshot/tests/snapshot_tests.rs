//! Snapshot rendering tests.

use geodesy::destination_point;
use map_features::{render_batch, MapSession, RenderOptions};
use snapshot::{render_pixmap, render_snapshot, viewport_for, SnapshotError, SnapshotOptions};
use test_utils::{grey_icon_row, orange_dot_row};
use warning_common::MapView;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn session_with(rows: &[warning_common::SourceRow]) -> MapSession {
    let mut session = MapSession::new(MapView::default());
    render_batch(rows, &RenderOptions::default(), &mut session);
    session
}

#[test]
fn test_snapshot_is_png() {
    let session = session_with(&[orange_dot_row(), grey_icon_row()]);
    let bytes = render_snapshot(&session, &SnapshotOptions::default()).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
}

#[test]
fn test_buffer_is_tinted_with_severity_color() {
    let session = session_with(&[orange_dot_row()]);
    let options = SnapshotOptions {
        width: 400,
        height: 400,
        padding: 0.1,
    };
    let pixmap = render_pixmap(&session, &options).unwrap();

    // Halfway between the center and the ring, due east.
    let viewport = viewport_for(&session, &options);
    let (lon, lat) = destination_point(121.25, 14.17, std::f64::consts::FRAC_PI_2, 10.0);
    let (x, y) = viewport.project(lon, lat);

    let pixel = pixmap.pixel(x as u32, y as u32).unwrap().demultiply();
    assert!(
        pixel.red() as i32 - pixel.blue() as i32 > 40,
        "expected orange tint, got {:?}",
        (pixel.red(), pixel.green(), pixel.blue())
    );
}

#[test]
fn test_empty_session_renders_background() {
    let session = MapSession::new(MapView::default());
    let pixmap = render_pixmap(
        &session,
        &SnapshotOptions {
            width: 64,
            height: 32,
            padding: 0.0,
        },
    )
    .unwrap();
    let pixel = pixmap.pixel(10, 10).unwrap();
    assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (0xE8, 0xEC, 0xEF));
}

#[test]
fn test_invalid_sizes_rejected() {
    let session = MapSession::default();
    for (width, height) in [(0, 10), (10, 0), (5000, 10)] {
        let err = render_pixmap(
            &session,
            &SnapshotOptions {
                width,
                height,
                padding: 0.0,
            },
        )
        .unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidSize { .. }));
    }
}
