use std::path::PathBuf;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use boggle_tools::boggle::board::{BOARD_HEIGHT, BOARD_WIDTH};
use boggle_tools::{find_valid_words, find_valid_words_parallel, Board, FileFormat, Wordlist};

// Rough English letter weights, so random boards actually contain words.
const LETTERS: &str = "eeeeeeeeeeeeaaaaaaaaaiiiiiiiiioooooooonnnnnnrrrrrrttttttllllssssuuuuddddgggbbccmmppffhhvvwwyykjxqz";

fn random_board(rng: &mut StdRng) -> Board {
    let letters: Vec<char> = LETTERS.chars().collect();
    let rows: Vec<Vec<String>> = (0..BOARD_HEIGHT)
        .map(|_| (0..BOARD_WIDTH)
            .map(|_| letters[rng.gen_range(0..letters.len())].to_ascii_uppercase().to_string())
            .collect())
        .collect();
    Board::from_rows(rows).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    data_dir.push("data/small.txt");
    let wl = Wordlist::from_file(&data_dir, &FileFormat::default()).unwrap();

    let mut rng = StdRng::seed_from_u64(17);
    let boards: Vec<Board> = (0..50).map(|_| random_board(&mut rng)).collect();

    let mut group = c.benchmark_group("50 boards");
    group.bench_function("sequential", |b| b.iter(|| {
        boards.iter().map(|board| find_valid_words(board, &wl).unwrap().len()).sum::<usize>()
    }));
    group.bench_function("parallel", |b| b.iter(|| {
        boards.iter().map(|board| find_valid_words_parallel(board, &wl).unwrap().len()).sum::<usize>()
    }));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
