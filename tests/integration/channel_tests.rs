//! Channel list query battery over a decoded multi-layer header.
//!
//! Mirrors how a compositing tool walks a render: enumerate layers, pull
//! each layer's channels, probe suffixes across layers, and collect the
//! default (layerless) channels.

use exr_header::{Header, SliceSource};

use super::test_utils::{create_multi_layer_header, init_tracing};

#[test]
fn test_layer_enumeration() {
    init_tracing();
    let hdr = Header::read(&mut SliceSource::new(&create_multi_layer_header())).unwrap();
    let channels = hdr.channels().unwrap();

    let layers = channels.layers();
    assert_eq!(layers, ["diffuse", "shadow", "specular"]);
    assert!(layers.len() < channels.len());
}

#[test]
fn test_every_layer_yields_its_channels() {
    let hdr = Header::read(&mut SliceSource::new(&create_multi_layer_header())).unwrap();
    let channels = hdr.channels().unwrap();

    for layer in channels.layers() {
        let in_layer = channels.channels_in_layer(layer);
        assert_eq!(in_layer.len(), 3, "layer {layer}");
        for ch in in_layer {
            assert_eq!(ch.layer(), Some(layer));
            assert!(ch.name.starts_with(layer));
        }
    }
}

#[test]
fn test_prefix_query_is_contiguous_and_ordered() {
    let hdr = Header::read(&mut SliceSource::new(&create_multi_layer_header())).unwrap();
    let channels = hdr.channels().unwrap();

    let run = channels.channels_with_prefix("shadow");
    let names: Vec<&str> = run.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["shadow.B", "shadow.G", "shadow.R"]);

    // The run is a window into the original sequence.
    let all: Vec<&str> = channels.iter().map(|c| c.name.as_str()).collect();
    let start = all.iter().position(|n| *n == "shadow.B").unwrap();
    assert_eq!(&all[start..start + 3], names.as_slice());
}

#[test]
fn test_suffix_queries_across_layers() {
    let hdr = Header::read(&mut SliceSource::new(&create_multi_layer_header())).unwrap();
    let channels = hdr.channels().unwrap();

    // "G" appears as a default channel and once per color layer.
    let greens = channels.channels_with_suffix("G", false);
    assert_eq!(greens.len(), 4);

    // Case-insensitive matching folds ASCII case.
    assert_eq!(channels.channels_with_suffix("g", true).len(), 4);
    assert_eq!(channels.channels_with_suffix("z", true).len(), 1);
    assert!(channels.channels_with_suffix("z", false).is_empty());
}

#[test]
fn test_default_channels_invariants() {
    let hdr = Header::read(&mut SliceSource::new(&create_multi_layer_header())).unwrap();
    let channels = hdr.channels().unwrap();

    let defaults = channels.default_channels();
    let names: Vec<&str> = defaults.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "G", "R", "Z"]);

    let layers = channels.layers();
    for ch in &defaults {
        assert!(!ch.name.contains('.'), "{}", ch.name);
        assert!(!layers.contains(&ch.name.as_str()));
        assert_eq!(ch.suffix(), ch.name);
    }
}

#[test]
fn test_compatibility_across_decoded_channels() {
    let hdr = Header::read(&mut SliceSource::new(&create_multi_layer_header())).unwrap();
    let channels = hdr.channels().unwrap();

    let r = channels.find("R").unwrap();
    let diffuse_r = channels.find("diffuse.R").unwrap();
    let z = channels.find("Z").unwrap();

    // Same HALF 1x1 storage, different names: compatible, not equal.
    assert!(r.is_compatible(diffuse_r));
    assert_ne!(r, diffuse_r);

    // Z is FLOAT, so it is not binary-compatible with the color channels.
    assert!(!r.is_compatible(z));
    assert!(z.is_compatible(z));
}
