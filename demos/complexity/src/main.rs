//! Complexity lab
//!
//! Runs the classic coursework experiments through the benchmark harness:
//! array summation, linear vs binary search, naive vs memoized Fibonacci,
//! Tower of Hanoi growth, and front insertion into a Vec vs a linked list.
//!
//! Each experiment prints a terminal table; the search comparison also
//! writes CSV and Markdown reports next to the working directory.

use algolab::console;
use algolab::core::LinkedList;
use algolab::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    console::init();

    sum_experiment()?;
    search_comparison()?;
    fibonacci_comparison()?;
    hanoi_growth()?;
    front_insertion()?;

    Ok(())
}

/// O(n) baseline: summing a random array (lab 00).
fn sum_experiment() -> Result<(), BenchError> {
    let config = ExperimentConfig::new("array sum")
        .with_sizes([1_000, 5_000, 10_000, 50_000, 100_000, 500_000])
        .with_repetitions(10)
        .with_complexity_note("O(n)");

    let subject = Subject::plain(|arr: &Vec<i64>| Ok(sum_array(arr)));
    let report = Experiment::new(config, subject, |n| {
        generators::random_array(n, generators::DEFAULT_SEED)
    })
        .with_subject_name("sum_array")
        .run()?;

    print!("{}", console::report_table(&report));
    Ok(())
}

/// Linear vs binary search on the worst-case target (lab 01).
fn search_comparison() -> Result<(), Box<dyn std::error::Error>> {
    let sizes = [1_000u64, 5_000, 10_000, 50_000, 100_000];

    let linear_config = ExperimentConfig::new("search comparison")
        .with_sizes(sizes)
        .with_repetitions(10)
        .with_complexity_note("O(n)")
        .with_csv_output("linear_search.csv");
    let linear_subject = Subject::plain(|arr: &Vec<i64>| {
        Ok(linear_search(arr, &generators::worst_case_target(arr)))
    });
    let linear_report = Experiment::new(linear_config.clone(), linear_subject, generators::sorted_array)
        .with_subject_name("linear_search")
        .run()?;
    export_configured(&linear_config, &linear_report)?;

    let binary_config = ExperimentConfig::new("search comparison")
        .with_sizes(sizes)
        .with_repetitions(1_000)
        .with_complexity_note("O(log n)")
        .with_csv_output("binary_search.csv")
        .with_markdown_output("search_comparison.md");
    let binary_subject = Subject::plain(|arr: &Vec<i64>| {
        Ok(binary_search(arr, &generators::worst_case_target(arr)))
    });
    let binary_report = Experiment::new(binary_config.clone(), binary_subject, generators::sorted_array)
        .with_subject_name("binary_search")
        .run()?;
    export_configured(&binary_config, &binary_report)?;

    print!("{}", console::report_table(&linear_report));
    print!("{}", console::report_table(&binary_report));
    print!(
        "{}",
        console::comparison_table(&[&linear_report, &binary_report])
    );
    Ok(())
}

/// Naive recursion against a memoized cache, cold and warm (lab 03).
fn fibonacci_comparison() -> Result<(), BenchError> {
    let sizes = [10u64, 20, 25, 30];

    let naive_config = ExperimentConfig::new("fibonacci")
        .with_sizes(sizes)
        .with_repetitions(5)
        .with_complexity_note("O(phi^n)");
    let naive_subject = Subject::plain(|n: &i64| fib_naive(*n));
    let naive_report = Experiment::new(naive_config, naive_subject, |n| n as i64)
        .with_subject_name("fib_naive")
        .run()?;

    let cold_config = ExperimentConfig::new("fibonacci")
        .with_sizes(sizes)
        .with_repetitions(5)
        .with_cache_policy(CachePolicy::Cold)
        .with_complexity_note("O(n) cold");
    let cold_report = Experiment::new(cold_config, Subject::cached(FibMemo::new()), |n| n as i64)
        .with_subject_name("fib_memo (cold)")
        .run()?;

    let warm_config = ExperimentConfig::new("fibonacci")
        .with_sizes(sizes)
        .with_repetitions(5)
        .with_cache_policy(CachePolicy::Warm)
        .with_complexity_note("O(1) warm");
    let warm_report = Experiment::new(warm_config, Subject::cached(FibMemo::new()), |n| n as i64)
        .with_subject_name("fib_memo (warm)")
        .run()?;

    print!(
        "{}",
        console::comparison_table(&[&naive_report, &cold_report, &warm_report])
    );

    let (value, calls) = fib_naive_counted(25)?;
    println!(
        "\nfib_naive(25) = {} in {} calls (closed form: {})",
        value,
        calls,
        naive_call_count(25)?
    );
    Ok(())
}

/// Exponential move generation (lab 03).
fn hanoi_growth() -> Result<(), BenchError> {
    let config = ExperimentConfig::new("hanoi moves")
        .with_sizes([8, 12, 16, 20])
        .with_repetitions(5)
        .with_complexity_note("O(2^n)");

    let subject = Subject::plain(|n: &u32| Ok(hanoi_moves(*n, Peg::A, Peg::B, Peg::C).len()));
    let report = Experiment::new(config, subject, |n| n as u32)
        .with_subject_name("hanoi_moves")
        .run()?;

    print!("{}", console::report_table(&report));
    Ok(())
}

/// Front insertion: Vec shifting vs linked-list relinking (lab 02).
fn front_insertion() -> Result<(), BenchError> {
    let sizes = [100u64, 500, 1_000, 5_000, 10_000];

    let vec_config = ExperimentConfig::new("front insertion")
        .with_sizes(sizes)
        .with_repetitions(10)
        .with_complexity_note("O(n) per insert");
    let vec_subject = Subject::plain(|n: &u64| {
        let mut v: Vec<u64> = Vec::new();
        for i in 0..*n {
            v.insert(0, i);
        }
        Ok(v.len())
    });
    let vec_report = Experiment::new(vec_config, vec_subject, generators::identity)
        .with_subject_name("Vec::insert(0)")
        .run()?;

    let list_config = ExperimentConfig::new("front insertion")
        .with_sizes(sizes)
        .with_repetitions(10)
        .with_complexity_note("O(1) per insert");
    let list_subject = Subject::plain(|n: &u64| {
        let mut list = LinkedList::new();
        for i in 0..*n {
            list.push_front(i);
        }
        Ok(list.len())
    });
    let list_report = Experiment::new(list_config, list_subject, generators::identity)
        .with_subject_name("LinkedList::push_front")
        .run()?;

    print!(
        "{}",
        console::comparison_table(&[&vec_report, &list_report])
    );
    Ok(())
}
