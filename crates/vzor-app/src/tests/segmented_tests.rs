use vzor_config::Config;
use vzor_core::{BoundaryFormat, DefaultPreprocessor, FreqListLayout, SegmentedWord, freqlist::read_rows};
use vzor_lang_czech::CharSegmenter;
use vzor_morph::Vocabulary;

use crate::commands::guess::guess_rows;
use crate::commands::test::write_test_log;
use crate::guesser::{Guesser, Strategy};
use crate::tests::{MemorySource, SEGMENTED_LIST, SPREAD, config, database};

fn segmented_config() -> Config {
    let mut config = config();
    config.data.frequency_layout = FreqListLayout::SegmentedWordFreq(BoundaryFormat::EqualsJoined);
    config
}

#[test]
fn forms_are_counted_by_surface_word() {
    let db = database();
    let config = segmented_config();
    let mut guesser = Guesser::new(Strategy::Trie, &config, &db, MemorySource(SEGMENTED_LIST));
    guesser.enter_bucket(&SegmentedWord::from_pieces(["h"])).unwrap();

    assert_eq!(guesser.trie().lookup("hradu"), 0);
    assert_eq!(guesser.frequency_of("hradu"), 20);
    assert_eq!(guesser.frequency_of("hradech"), 3);
    assert_eq!(guesser.frequency_of("hradě"), 0);
}

#[test]
fn excluded_lemma_empties_its_spread() {
    let mut db = database();
    db.load_spread(SPREAD.as_bytes()).unwrap();
    let before = db.paradigm("hrad").unwrap().spread().clone();
    assert_eq!(before[""], 50.0);

    let config = segmented_config();
    let mut guesser = Guesser::new(Strategy::Trie, &config, &db, MemorySource(SEGMENTED_LIST));
    guesser.enter_bucket(&SegmentedWord::from_pieces(["h"])).unwrap();

    let during = db.with_form_excluded(
        "hrad",
        "hrad",
        |form| guesser.frequency_of(form),
        |db| db.paradigm("hrad").unwrap().spread().clone(),
    );
    assert_eq!(during[""], 0.0);
    assert_eq!(during["u"], 0.0);
    assert_eq!(db.paradigm("hrad").unwrap().spread(), &before);
}

#[test]
fn test_log_over_segmented_list() {
    let mut db = database();
    db.load_spread(SPREAD.as_bytes()).unwrap();
    let before = db.paradigm("hrad").unwrap().spread().clone();

    let held_out = Vocabulary::parse("hrad:hrad\n".as_bytes(), "held_out.dic", &DefaultPreprocessor).unwrap();
    let config = segmented_config();
    let mut guesser = Guesser::new(Strategy::Trie, &config, &db, MemorySource(SEGMENTED_LIST));

    let mut out = Vec::new();
    let tested = write_test_log(&mut db, &held_out, &CharSegmenter, &mut guesser, 5, &mut out).unwrap();

    assert_eq!(tested, 1);
    let log = String::from_utf8(out).unwrap();
    assert_eq!(log.lines().next(), Some("hrad:hrad"));
    assert_eq!(log.lines().count(), 2);
    assert_eq!(db.paradigm("hrad").unwrap().spread(), &before);
}

#[test]
fn guesses_use_the_list_segmentation() {
    let db = database();
    let config = segmented_config();
    let mut guesser = Guesser::new(Strategy::Trie, &config, &db, MemorySource(SEGMENTED_LIST));
    let mut guessed = Vec::new();

    let stats = guess_rows(
        &db,
        &db.form_index(),
        &CharSegmenter,
        &mut guesser,
        read_rows(SEGMENTED_LIST.as_bytes(), config.data.frequency_layout),
        config.guess.min_frequency,
        |row, ranking| {
            guessed.push((row.word.clone(), ranking.to_vec()));
            Ok(())
        },
    )
    .unwrap();

    assert_eq!((stats.guessed, stats.rare, stats.known), (5, 1, 6));
    for (word, ranking) in guessed.iter().filter(|(w, _)| w == "kočka" || w == "kočky") {
        assert_eq!(ranking[0].paradigm, "žena", "{word}");
        assert_eq!(ranking[0].split, 4, "{word}");
        assert_eq!(ranking[0].intersection, 5, "{word}");
    }
}
