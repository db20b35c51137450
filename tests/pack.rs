mod common;

use std::fs;
use std::path::PathBuf;

use common::synthetic_maps::{gradient, write_channel_set, write_gray_png, write_rgb_png};
use texpack::{
    ChannelRole, Error, LumaWeights, OutputFormat, PackParams, load_channels, pack_files,
    pack_to_buffer, pack_to_path,
};

fn params_for(inputs: texpack::Channels<PathBuf>, output: PathBuf) -> PackParams {
    PackParams {
        inputs,
        output,
        list_working_dir: false,
        ..Default::default()
    }
}

#[test]
fn two_by_two_scenario_packs_expected_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_channel_set(
        dir.path(),
        2,
        2,
        [
            &[10, 20, 30, 40],
            &[1, 2, 3, 4],
            &[100, 110, 120, 130],
            &[255, 0, 255, 0],
        ],
    );
    let output = dir.path().join("result.png");

    let report = pack_to_path(&params_for(inputs, output.clone())).unwrap();
    assert_eq!((report.width, report.height), (2, 2));
    assert_eq!(report.format, OutputFormat::PNG);
    assert!(report.manifest.is_none());

    let decoded = image::open(&output).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgba8);
    let rgba = decoded.to_rgba8();
    assert_eq!(rgba.get_pixel(0, 0).0, [10, 1, 100, 255]);
    assert_eq!(rgba.get_pixel(1, 0).0, [20, 2, 110, 0]);
    assert_eq!(rgba.get_pixel(0, 1).0, [30, 3, 120, 255]);
    assert_eq!(rgba.get_pixel(1, 1).0, [40, 4, 130, 0]);
}

#[test]
fn every_pixel_keeps_its_source_samples() {
    let dir = tempfile::tempdir().unwrap();
    let (w, h) = (37, 23);
    let planes: Vec<Vec<u8>> = (0..4).map(|seed| gradient(w, h, seed * 61)).collect();
    let inputs = write_channel_set(
        dir.path(),
        w,
        h,
        [&planes[0], &planes[1], &planes[2], &planes[3]],
    );

    let packed = pack_to_buffer(&inputs, LumaWeights::Rec601).unwrap();
    assert_eq!(packed.dimensions(), (w, h));
    for y in 0..h {
        for x in 0..w {
            let i = (y * w + x) as usize;
            assert_eq!(
                packed.pixel(x, y),
                [planes[0][i], planes[1][i], planes[2][i], planes[3][i]],
                "pixel ({}, {})",
                x,
                y
            );
        }
    }
}

#[test]
fn mismatched_sizes_fail_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_channel_set(dir.path(), 2, 2, [&[0; 4], &[0; 4], &[0; 4], &[0; 4]]);
    write_gray_png(&inputs.green, 3, 2, &[0; 6]);
    let output = dir.path().join("result.png");

    match pack_to_path(&params_for(inputs, output.clone())) {
        Err(Error::DimensionMismatch {
            found_role, found, ..
        }) => {
            assert_eq!(found_role, ChannelRole::Green);
            assert_eq!(found, (3, 2));
        }
        other => panic!("expected dimension mismatch, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn mismatch_leaves_previous_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_channel_set(dir.path(), 2, 2, [&[0; 4], &[0; 4], &[0; 4], &[0; 4]]);
    write_gray_png(&inputs.alpha, 2, 1, &[0; 2]);
    let output = dir.path().join("result.png");
    fs::write(&output, b"previous run").unwrap();

    assert!(pack_to_path(&params_for(inputs, output.clone())).is_err());
    assert_eq!(fs::read(&output).unwrap(), b"previous run");
}

#[test]
fn missing_input_is_a_decode_error_naming_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut inputs = write_channel_set(dir.path(), 2, 2, [&[0; 4], &[0; 4], &[0; 4], &[0; 4]]);
    inputs.blue = dir.path().join("missing.png");
    let output = dir.path().join("result.png");

    let err = pack_to_path(&params_for(inputs, output.clone())).unwrap_err();
    match &err {
        Error::Decode { role, path, .. } => {
            assert_eq!(*role, ChannelRole::Blue);
            assert_eq!(path, &dir.path().join("missing.png"));
        }
        other => panic!("expected decode error, got {:?}", other),
    }
    assert!(err.to_string().contains("missing.png"));
    assert!(!output.exists());
}

#[test]
fn undecodable_input_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_channel_set(dir.path(), 2, 2, [&[0; 4], &[0; 4], &[0; 4], &[0; 4]]);
    fs::write(&inputs.red, b"this is not an image").unwrap();

    assert!(matches!(
        load_channels(&inputs, LumaWeights::Rec601),
        Err(Error::Decode {
            role: ChannelRole::Red,
            ..
        })
    ));
}

#[test]
fn decode_errors_are_reported_in_role_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut inputs = write_channel_set(dir.path(), 2, 2, [&[0; 4], &[0; 4], &[0; 4], &[0; 4]]);
    inputs.green = dir.path().join("nope_green.png");
    inputs.alpha = dir.path().join("nope_alpha.png");

    for _ in 0..8 {
        assert!(matches!(
            load_channels(&inputs, LumaWeights::Rec601),
            Err(Error::Decode {
                role: ChannelRole::Green,
                ..
            })
        ));
    }
}

#[test]
fn color_sources_are_luminance_converted() {
    let dir = tempfile::tempdir().unwrap();
    let mut inputs = write_channel_set(dir.path(), 2, 1, [&[5, 6], &[7, 8], &[9, 10], &[11, 12]]);
    let color = dir.path().join("color.png");
    write_rgb_png(&color, 2, 1, &[[255, 0, 0], [0, 0, 255]]);
    inputs.green = color;

    let packed = pack_to_buffer(&inputs, LumaWeights::Rec601).unwrap();
    assert_eq!(packed.pixel(0, 0), [5, 76, 9, 11]);
    assert_eq!(packed.pixel(1, 0), [6, 29, 10, 12]);
}

#[test]
fn manifest_sidecar_is_written_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_channel_set(dir.path(), 1, 1, [&[1], &[2], &[3], &[4]]);
    let output = dir.path().join("packed.tga");

    let mut params = params_for(inputs.clone(), output.clone());
    params.manifest = true;
    let report = pack_to_path(&params).unwrap();

    assert_eq!(report.format, OutputFormat::TGA);
    let sidecar = report.manifest.expect("manifest path");
    assert_eq!(sidecar, dir.path().join("packed.json"));

    let manifest: texpack::PackManifest =
        serde_json::from_str(&fs::read_to_string(&sidecar).unwrap()).unwrap();
    assert_eq!(manifest.channels.red.path, inputs.red);
    assert_eq!(manifest.channels.alpha.source_color, "L8");
    assert_eq!((manifest.width, manifest.height), (1, 1));

    let rgba = image::open(&output).unwrap().to_rgba8();
    assert_eq!(rgba.get_pixel(0, 0).0, [1, 2, 3, 4]);
}

#[test]
fn unsupported_output_extension_is_an_encode_error() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_channel_set(dir.path(), 1, 1, [&[1], &[2], &[3], &[4]]);
    let output = dir.path().join("result.jpg");

    let err = pack_files(
        &inputs.red,
        &inputs.green,
        &inputs.blue,
        &inputs.alpha,
        &output,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Encode { .. }));
    assert!(!output.exists());
}

#[test]
fn sidecar_failure_is_reported_after_the_image_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_channel_set(dir.path(), 1, 1, [&[1], &[2], &[3], &[4]]);
    let output = dir.path().join("result.png");
    // a directory where the sidecar should go makes the JSON write fail
    fs::create_dir(dir.path().join("result.json")).unwrap();

    let mut params = params_for(inputs, output.clone());
    params.manifest = true;

    match pack_to_path(&params) {
        Err(Error::Encode { path, .. }) => assert_eq!(path, dir.path().join("result.json")),
        other => panic!("expected sidecar encode error, got {:?}", other),
    }
    let rgba = image::open(&output).unwrap().to_rgba8();
    assert_eq!(rgba.get_pixel(0, 0).0, [1, 2, 3, 4]);
}
