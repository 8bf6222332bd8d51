use clap::Parser;
use robin_map::Arena;
use robin_map::HashMap;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: usize,

    /// Percentage of slots to fill before removing anything.
    #[arg(short = 'f', long = "fill_percent", default_value_t = 90)]
    fill_percent: usize,

    /// Remove every n-th texture after filling, then refill to capacity.
    #[arg(short = 'r', long = "remove_every", default_value_t = 3)]
    remove_every: usize,

    /// Print the slot listing after the run.
    #[arg(long)]
    dump: bool,
}

#[derive(Clone, Copy, Debug)]
struct TextureHandle {
    id: u32,
    refcount: u16,
}

/// Texture lookups keyed by asset path, with handles borrowed from one
/// arena shared with the material map.
struct Registry<'a> {
    textures: HashMap<'a, TextureHandle>,
    materials: HashMap<'a, u32>,
}

impl<'a> Registry<'a> {
    fn new(arena: &'a Arena, capacity: usize) -> Self {
        Self {
            textures: HashMap::with_capacity_in(capacity, arena),
            materials: HashMap::with_capacity_in(capacity.div_ceil(4).max(2), arena),
        }
    }

    fn load_texture(&mut self, path: &str, id: u32) -> bool {
        if let Some(handle) = self.textures.find_mut(path.as_bytes()) {
            handle.refcount += 1;
            return true;
        }
        self.textures
            .add(path.as_bytes(), TextureHandle { id, refcount: 1 }, false)
    }
}

fn texture_path(i: usize) -> String {
    format!("assets/textures/tile_{i:05}.png")
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!(
        "Creating registry with target capacity: {}",
        args.target_capacity
    );

    let arena = Arena::new();
    let mut registry = Registry::new(&arena, args.target_capacity.max(2));
    let capacity = registry.textures.capacity();
    println!("Actual capacity: {capacity}");

    let initial = (capacity * args.fill_percent.min(100)) / 100;
    let mut num_failures = 0;
    for i in 0..initial {
        if !registry.load_texture(&texture_path(i), i as u32) {
            num_failures += 1;
        }
    }
    println!("Loaded {} textures", registry.textures.len());

    let mut removed = 0;
    if args.remove_every > 0 {
        for i in (0..initial).step_by(args.remove_every) {
            if registry.textures.remove(texture_path(i).as_bytes()) {
                removed += 1;
            }
        }
    }
    println!("Unloaded {removed} textures");

    let mut next = initial;
    while !registry.textures.full() {
        if !registry.load_texture(&texture_path(next), next as u32) {
            num_failures += 1;
        }
        next += 1;
    }
    if registry.load_texture("assets/textures/one_too_many.png", u32::MAX) {
        println!("Unexpectedly accepted a texture into a full registry");
    } else {
        num_failures += 1;
    }

    let mut material_id = 0;
    for (path, handle) in &registry.textures {
        if registry.materials.full() {
            break;
        }
        if handle.id % 2 == 0 && registry.materials.add(path, material_id, false) {
            material_id += 1;
        }
    }
    println!("Registered {} materials", registry.materials.len());

    let hist = registry.textures.probe_histogram();
    println!("probe histogram ({} entries):", registry.textures.len());
    for (distance, count) in hist.iter().enumerate() {
        println!("{distance:>3} | {count}");
    }
    registry.textures.debug_stats().print();
    println!("Rejected insertions: {num_failures}");

    if args.dump {
        print!("{}", registry.textures.dump());
    }
}
