use clap::Parser;
use log::debug;
use min_pq::MinHeap;
use std::fmt;

#[derive(Parser, Debug)]
#[command(name = "heap-showcase")]
#[command(about = "Walks a min-heap through integer, float and ranked record inputs")]
struct Args {
    #[arg(short, long)]
    verbose: bool,
}

/// Ordered by rank only; the name is carried along.
struct Employee {
    name: &'static str,
    rank: u32,
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl PartialOrd for Employee {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.rank.partial_cmp(&other.rank)
    }
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Employee({}, {})", self.name, self.rank)
    }
}

fn walk<T: PartialOrd + fmt::Debug>(title: &str, input: Vec<T>, extra: T) {
    println!("\n{title}:");
    debug!("input: {input:?}");
    let mut heap = MinHeap::build(input);
    println!("Initial heap: {heap:?}");
    let shown = format!("{extra:?}");
    heap.insert(extra);
    println!("After adding {shown}: {heap:?}");
    match heap.extract_min() {
        Some(min) => println!("Popped minimum: {min:?}"),
        None => println!("Popped minimum: <empty>"),
    }
    println!("Heap after pop: {heap:?}");
}

fn main() {
    let args = Args::parse();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();

    println!("MinHeap showcase");
    println!("================");

    walk("1. Integers", vec![4, 10, 3, 5, 1, 1], 2);
    walk("2. Floats", vec![4.5, 10.1, 3.3, 5.7, 1.0], 2.2);
    walk(
        "3. Ranked records",
        vec![
            Employee { name: "Alice", rank: 3 },
            Employee { name: "Bob", rank: 2 },
            Employee { name: "Charlie", rank: 4 },
            Employee { name: "David", rank: 1 },
        ],
        Employee { name: "Eve", rank: 2 },
    );
}
