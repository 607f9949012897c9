use std::{fmt::Write, fs::read_to_string, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use simple_logger::SimpleLogger;

use dungeon::{Content, Dungeon, Layer, PartialConfig, Walls};

#[derive(Debug, Parser)]
struct Args {
    /// Configuration file for the dungeon
    #[clap(short)]
    config: Option<PathBuf>,
    /// Overrides for the configuration file
    #[clap(flatten)]
    overrides: PartialConfig,
    /// Directory to save one image per layer into
    #[clap(short, long)]
    output: Option<PathBuf>,
}

const INNER_WIDTH: usize = 5;

const TILE_SIZE: u32 = 10;
const WALL_SIZE: u32 = 1;
const WALL_COLOR: [u8; 3] = [0, 0, 0];

fn floor_color(content: Content) -> [u8; 3] {
    match content {
        Content::NoContent => [255, 255, 255],
        Content::Altar => [255, 215, 0],
        Content::Chest => [160, 82, 45],
        Content::Portal => [106, 90, 205],
    }
}

fn draw_ascii(layer: &Layer) -> String {
    let (cols, rows) = layer.dimensions();
    let mut out = String::new();
    let horizontal_line = |out: &mut String, row: usize, side: Walls| {
        out.push('+');
        for col in 0..cols {
            let fill = if layer.walls_around(col, row).contains(side) {
                '-'
            } else {
                ' '
            };
            out.extend(std::iter::repeat(fill).take(INNER_WIDTH));
            out.push('+');
        }
        out.push('\n');
    };
    for row in 0..rows {
        horizontal_line(&mut out, row, Walls::Top);
        for col in 0..cols {
            let walls = layer.walls_around(col, row);
            let symbol = layer
                .room_at(col, row)
                .map_or(' ', |room| room.content().symbol());
            out.push(if walls.contains(Walls::Left) { '|' } else { ' ' });
            let _ = write!(out, "{symbol:^width$}", width = INNER_WIDTH);
        }
        let right = layer.walls_around(cols - 1, row).contains(Walls::Right);
        out.push(if right { '|' } else { ' ' });
        out.push('\n');
    }
    horizontal_line(&mut out, rows - 1, Walls::Bottom);
    out
}

fn draw_image(layer: &Layer) -> image::RgbImage {
    let (cols, rows) = layer.dimensions();
    let mut image = image::RgbImage::new(TILE_SIZE * cols as u32, TILE_SIZE * rows as u32);
    for (pos, room) in layer.rooms() {
        let [left, top] = [pos.col, pos.row].map(|x| x as u32 * TILE_SIZE);
        let walls = layer.walls_around(pos.col, pos.row);
        for x in 0..TILE_SIZE {
            for y in 0..TILE_SIZE {
                let on_wall = (y < WALL_SIZE && walls.contains(Walls::Top))
                    || (y >= TILE_SIZE - WALL_SIZE && walls.contains(Walls::Bottom))
                    || (x < WALL_SIZE && walls.contains(Walls::Left))
                    || (x >= TILE_SIZE - WALL_SIZE && walls.contains(Walls::Right))
                    // corners are always solid
                    || ((x < WALL_SIZE || x >= TILE_SIZE - WALL_SIZE)
                        && (y < WALL_SIZE || y >= TILE_SIZE - WALL_SIZE));
                image[(left + x, top + y)].0 = if on_wall {
                    WALL_COLOR
                } else {
                    floor_color(room.content())
                };
            }
        }
    }
    image
}

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .without_timestamps()
        .with_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .env()
        .init()
        .context("While initializing logging")?;

    let Args {
        config,
        overrides,
        output,
    } = Args::parse();
    let file: PartialConfig = config
        .map(|path| {
            read_to_string(path)
                .context("Cannot read config file")
                .and_then(|s| toml::from_str(&s).context("Cannot parse config file"))
        })
        .transpose()
        .context("While loading configs")?
        .unwrap_or_default();
    let mut partial = file.merge(overrides);
    // a fresh dungeon on each run unless a seed is given
    partial.seed = partial.seed.or_else(|| Some(rand::random()));
    let config = partial.or_defaults();

    let dungeon = Dungeon::generate(&config).context("While generating the dungeon")?;

    log::info!("Dungeon with seed {}", dungeon.seed());
    log::info!(
        "{:>9} | {:>4} | {:>4} | {:>7} | Content",
        "Layer No.",
        "Rows",
        "Cols",
        "Walls %"
    );
    for (i, layer) in dungeon.layers().iter().enumerate() {
        let (cols, rows) = layer.dimensions();
        let content = Content::PRIORITY
            .map(|c| format!("{} {c}", layer.count(c)))
            .join(", ");
        log::info!(
            "{:>9} | {rows:>4} | {cols:>4} | {:>7} | {content}",
            i + 1,
            layer.filled_part()
        );
    }

    for (i, layer) in dungeon.layers().iter().enumerate() {
        println!("--- Layer {} ---", i + 1);
        print!("{}", draw_ascii(layer));
    }

    if let Some(dir) = output {
        std::fs::create_dir_all(&dir).context("While creating the output directory")?;
        for (i, layer) in dungeon.layers().iter().enumerate() {
            draw_image(layer)
                .save(dir.join(format!("layer-{}.png", i + 1)))
                .context("While saving the image")?;
        }
    }
    Ok(())
}
