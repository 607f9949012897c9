use clap::Parser;
use futures::future::join_all;
use rand::{thread_rng, Rng, SeedableRng};
use rand_wyrand::WyRand;

use dungeon::{
    config::DEFAULT_LAYERS_STRUCTURE, Config, Content, Dungeon, Error, Layer, LayerParams,
    Orientation, PartialConfig, Shape,
};

mod common;
use common::{perimeter_intact, reachable};

fn config(layers_structure: Vec<Shape>) -> Config {
    Config {
        seed: 42,
        layers_structure,
        optional_walls_part: 0.65,
        altars_part: 0.1,
        chests_part: 0.3,
    }
}

#[test]
fn portal_rule_for_four_layers() {
    let config = config(vec![Shape::new(5, 5); 4]);
    let portals: Vec<_> = config
        .layer_params()
        .map(|(_, params)| params.content.portals)
        .collect();
    assert_eq!(portals, [2, 2, 2, 1]);

    let dungeon = Dungeon::generate(&config).unwrap();
    let placed: Vec<_> = dungeon
        .layers()
        .iter()
        .map(|l| l.count(Content::Portal))
        .collect();
    assert_eq!(placed, [2, 2, 2, 1]);
}

#[test]
fn portal_rule_for_a_single_layer() {
    let config = config(vec![Shape::new(3, 3)]);
    let (_, params) = config.layer_params().next().unwrap();
    assert_eq!(params.content.portals, 1);
    assert_eq!(config.layer_params().count(), 1);
}

#[test]
fn content_counts_are_floored_per_layer() {
    let config = Config {
        altars_part: 0.1,
        chests_part: 0.3,
        ..config(vec![Shape::new(10, 10), Shape::new(7, 3), Shape::new(1, 1)])
    };
    let counts: Vec<_> = config
        .layer_params()
        .map(|(_, p)| (p.content.altars, p.content.chests))
        .collect();
    assert_eq!(counts, [(10, 30), (2, 6), (0, 0)]);
    assert!(config.layer_params().all(|(_, p)| p.filled_part == 0.65));
}

#[test]
fn content_counts_scale_by_cols_then_rows() {
    // 0.06 * 30 * 30 rounds below 54 when multiplied column first
    let config = Config {
        altars_part: 0.03,
        chests_part: 0.06,
        ..config(vec![Shape::new(30, 30)])
    };
    let (_, params) = config.layer_params().next().unwrap();
    assert_eq!((params.content.altars, params.content.chests), (26, 53));

    let dungeon = Dungeon::generate(&config).unwrap();
    let layer = dungeon.layer(0).unwrap();
    assert_eq!(layer.requested_content(), params.content);
    assert_eq!(layer.count(Content::Chest), 53);
    assert_eq!(layer.count(Content::Altar), 26);
}

#[test]
fn default_dungeon() {
    let config = Config::default();
    assert_eq!(config.layers_structure, DEFAULT_LAYERS_STRUCTURE);
    let dungeon = Dungeon::generate(&config).unwrap();

    assert_eq!(dungeon.layers().len(), 4);
    for (layer, shape) in dungeon.layers().iter().zip(DEFAULT_LAYERS_STRUCTURE) {
        assert_eq!(layer.shape(), shape);
        assert_eq!(reachable(layer), shape.area());
        assert!(perimeter_intact(layer));
    }
    // the bottom layer is a single portal room
    let bottom = dungeon.layer(3).unwrap();
    assert_eq!(bottom.room_at(0, 0).unwrap().content(), Content::Portal);
}

#[test]
fn empty_structure_gives_an_empty_dungeon() {
    let dungeon = Dungeon::generate(&config(vec![])).unwrap();
    assert!(dungeon.layers().is_empty());
}

#[test]
fn same_seed_same_dungeon() {
    let config = config(vec![Shape::new(8, 6), Shape::new(5, 5), Shape::new(2, 1)]);
    let a = Dungeon::generate(&config).unwrap();
    let b = Dungeon::generate(&config).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.seed(), 42);
}

#[test]
fn same_stream_same_layer() {
    let params = LayerParams {
        filled_part: 0.5,
        ..Default::default()
    };
    let mut seed = thread_rng().gen::<u64>();
    for _ in 0..10 {
        let shape = Shape::new(9, 4);
        let a = Layer::generate(shape, &params, &mut WyRand::seed_from_u64(seed)).unwrap();
        let b = Layer::generate(shape, &params, &mut WyRand::seed_from_u64(seed)).unwrap();
        assert_eq!(a, b);
        seed = seed.wrapping_add(1);
    }
}

#[test]
fn queries_do_not_mutate() {
    let dungeon = Dungeon::generate(&config(vec![Shape::new(6, 6)])).unwrap();
    let layer = dungeon.layer(0).unwrap();
    let before = layer.clone();
    let read = |layer: &Layer| {
        let mut out = vec![];
        for row in 0..=6 {
            for col in 0..=6 {
                out.push((
                    layer.wall_exists(Orientation::Horizontal, col, row),
                    layer.wall_exists(Orientation::Vertical, col, row),
                    layer.room_at(col, row),
                ));
            }
        }
        out
    };
    assert_eq!(read(layer), read(layer));
    assert_eq!(*layer, before);
    assert_eq!(layer.room_at(6, 0), None);
}

#[test]
fn invalid_dimensions_are_rejected() {
    assert_eq!(
        Layer::new(0, 3),
        Err(Error::InvalidDimension { cols: 0, rows: 3 })
    );
    let config = config(vec![Shape::new(2, 2), Shape::new(4, 0)]);
    assert_eq!(
        config.validate(),
        Err(Error::InvalidDimension { cols: 4, rows: 0 })
    );
    assert_eq!(
        Dungeon::generate(&config),
        Err(Error::InvalidDimension { cols: 4, rows: 0 })
    );
}

#[test]
fn oversized_dimensions_are_rejected() {
    assert_eq!(
        Layer::new(usize::MAX, 2),
        Err(Error::InvalidDimension {
            cols: usize::MAX,
            rows: 2
        })
    );
    assert_eq!(
        Layer::new(3, usize::MAX / 2),
        Err(Error::InvalidDimension {
            cols: 3,
            rows: usize::MAX / 2
        })
    );
    let config = config(vec![Shape::new(2, 2), Shape::new(usize::MAX / 2, 3)]);
    assert!(matches!(
        config.validate(),
        Err(Error::InvalidDimension { rows: 3, .. })
    ));
}

#[test]
fn invalid_ratios_are_rejected() {
    let base = config(vec![Shape::new(2, 2)]);
    for (config, field) in [
        (
            Config {
                optional_walls_part: 1.01,
                ..base.clone()
            },
            "optional_walls_part",
        ),
        (
            Config {
                altars_part: -0.5,
                ..base.clone()
            },
            "altars_part",
        ),
        (
            Config {
                chests_part: f64::NAN,
                ..base.clone()
            },
            "chests_part",
        ),
    ] {
        match Dungeon::generate(&config) {
            Err(Error::InvalidRatio { name, .. }) => assert_eq!(name, field),
            other => panic!("expected an invalid {field}, got {other:?}"),
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_generation_matches_sequential() {
    join_all((0..5).map(|_| async {
        let mut rng = thread_rng();
        let config = Config {
            seed: rng.gen(),
            layers_structure: (0..4)
                .map(|i| Shape::new(i * 3 + 1, i * 2 + 1))
                .collect(),
            optional_walls_part: rng.gen_range(0.0..=1.0),
            altars_part: 0.3,
            chests_part: 0.3,
        };
        let concurrent = Dungeon::generate_concurrent(&config).await.unwrap();
        let sequential = Dungeon::generate(&config).unwrap();
        assert_eq!(concurrent, sequential);
    }))
    .await;
}

#[tokio::test]
async fn concurrent_generation_reports_errors() {
    let config = config(vec![Shape::new(3, 3), Shape::new(0, 1)]);
    assert!(config.validate().is_err());
    assert_eq!(
        Dungeon::generate_concurrent(&config).await,
        Err(Error::InvalidDimension { cols: 0, rows: 1 })
    );
}

#[test]
fn partial_config_from_toml_and_flags() {
    let file: PartialConfig = toml::from_str(
        r#"
        seed = 7
        layers_structure = [[4, 3], [2, 2]]
        altars_part = 0.25
        "#,
    )
    .unwrap();
    let flags = PartialConfig::try_parse_from([
        "dungeon",
        "--layers",
        "6x5,3x3,1x1",
        "--optional-walls-part",
        "0.5",
    ])
    .unwrap();

    let config = file.clone().or_defaults();
    assert_eq!(config.seed, 7);
    assert_eq!(
        config.layers_structure,
        [Shape::new(4, 3), Shape::new(2, 2)]
    );
    assert_eq!(config.altars_part, 0.25);
    assert_eq!(config.chests_part, Config::default().chests_part);

    let config = file.merge(flags).or_defaults();
    assert_eq!(config.seed, 7);
    assert_eq!(
        config.layers_structure,
        [Shape::new(6, 5), Shape::new(3, 3), Shape::new(1, 1)]
    );
    assert_eq!(config.optional_walls_part, 0.5);
    assert_eq!(config.altars_part, 0.25);
}

#[test]
fn malformed_shapes_are_rejected() {
    assert!("3by3".parse::<Shape>().is_err());
    assert!("x3".parse::<Shape>().is_err());
    assert!(PartialConfig::try_parse_from(["dungeon", "--layers", "3x"]).is_err());
}
