//! End-to-end tests exercising the full query surface the way a library
//! consumer (script or command shell) would: construct a genome once,
//! then issue repeated read-only queries against it.

use nucleoscan::{
    complement, count_approximate_pattern, count_pattern, frequency_map, frequent_words,
    hamming_distance, is_reverse_palindrome, match_approximate_pattern, match_pattern,
    minimum_skew, motif, reverse_complement, skew, symbol_window_counts, translate,
    ApproximateScanner, Genome, NucleoscanError, Topology,
};

#[test]
fn test_genome_construction_and_queries() {
    let genome = Genome::from_tag("linear", "ATGCGTAGCATCGATCGATCGATCG").unwrap();

    assert_eq!(genome.len(), 25);
    assert_eq!(genome.topology(), Topology::Linear);

    // Exact search
    assert_eq!(count_pattern(&genome, "ATGC").unwrap(), 1);
    assert_eq!(match_pattern(&genome, "GATC").unwrap(), vec![12, 16, 20]);

    // Approximate search agrees with exact at distance 0
    assert_eq!(
        match_approximate_pattern(&genome, "GATC", 0).unwrap(),
        match_pattern(&genome, "GATC").unwrap()
    );
    assert!(
        count_approximate_pattern(&genome, "GATC", 1).unwrap()
            >= count_pattern(&genome, "GATC").unwrap()
    );
}

#[test]
fn test_spec_reference_cases() {
    // The concrete cases every implementation must reproduce
    let genome = Genome::from_tag("linear", "ATGATGATG").unwrap();
    assert_eq!(count_pattern(&genome, "ATG").unwrap(), 3);

    let genome = Genome::from_tag("linear", "ATCGATCG").unwrap();
    assert_eq!(match_pattern(&genome, "ATC").unwrap(), vec![0, 4]);

    assert_eq!(complement("ATGC"), "TACG");
    assert_eq!(reverse_complement("GGATCC"), "GGATCC");
    assert!(is_reverse_palindrome("GGATCC"));

    let genome = Genome::from_tag("linear", "GAGCC").unwrap();
    assert_eq!(skew(&genome), vec![0, 1, 1, 2, 1, 0]);
    assert_eq!(minimum_skew(&genome), vec![0, 5]);

    assert_eq!(hamming_distance("ATGC", "GCTA").unwrap(), 4);

    assert_eq!(translate("AUGCCAUAG").unwrap(), "MP*");
}

#[test]
fn test_motif_statistics_pipeline() {
    let motifs = ["ACGT", "ACCT", "ACGA"];

    let counts = motif::count_matrix(&motifs).unwrap();
    assert_eq!(counts[&'A'][2], 0);
    assert_eq!(counts[&'C'][2], 1);
    assert_eq!(counts[&'G'][2], 2);
    assert_eq!(counts[&'T'][2], 0);

    assert_eq!(motif::consensus(&motifs).unwrap(), "ACGT");
    assert_eq!(motif::score(&motifs).unwrap(), 2);

    let profile = motif::profile_matrix(&motifs).unwrap();
    for column in 0..4 {
        let sum: f64 = "ACGT".chars().map(|s| profile[&s][column]).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    assert!(motif::entropy(&motifs).unwrap() > 0.0);
    assert_eq!(motif::entropy(&["ACGT"]).unwrap(), 0.0);
}

#[test]
fn test_circular_genome_wraparound_scan() {
    let genome = Genome::from_tag("circular", "AGCGAT").unwrap();

    // The extended view appends the first half of the sequence
    assert_eq!(genome.extended_sequence(), "AGCGATAGC");

    // One half-length window per sequence position, wrapping the origin
    let counts = symbol_window_counts(&genome, 'G').unwrap();
    assert_eq!(counts, vec![1, 2, 1, 1, 0, 1]);

    // Pattern scans address the plain sequence, not the extended view
    assert_eq!(count_pattern(&genome, "AG").unwrap(), 1);
}

#[test]
fn test_frequency_analysis_standalone() {
    // Frequency analysis takes raw text, no genome needed
    let map = frequency_map("ATGATGATG", 3).unwrap();
    assert_eq!(map.values().sum::<usize>(), 7);

    let words = frequent_words("ATGATGATG", 2).unwrap();
    assert_eq!(words, vec!["AT", "TG"]);
}

#[test]
fn test_error_policy_is_uniform() {
    // Fail fast at every scanning entry point, with tagged errors
    assert!(matches!(
        Genome::from_tag("spiral", "ATGC").unwrap_err(),
        NucleoscanError::UnknownTopology(_)
    ));
    assert!(matches!(
        Genome::from_tag("linear", "").unwrap_err(),
        NucleoscanError::EmptySequence
    ));

    let genome = Genome::from_tag("linear", "ATGC").unwrap();
    assert!(matches!(
        count_pattern(&genome, "").unwrap_err(),
        NucleoscanError::EmptyPattern
    ));
    assert!(matches!(
        match_pattern(&genome, "ATGCA").unwrap_err(),
        NucleoscanError::PatternTooLong { .. }
    ));
    assert!(matches!(
        frequency_map("ATGC", 0).unwrap_err(),
        NucleoscanError::InvalidKmerLength { .. }
    ));
    assert!(matches!(
        hamming_distance("AT", "ATG").unwrap_err(),
        NucleoscanError::LengthMismatch { .. }
    ));
    assert!(matches!(
        motif::consensus(&[]).unwrap_err(),
        NucleoscanError::EmptyMotifSet
    ));
    assert!(matches!(
        translate("AU").unwrap_err(),
        NucleoscanError::PartialCodon(2)
    ));
}

#[test]
fn test_parallel_scanner_agrees_with_scalar() {
    let sequence: String = "GAGCCATGATCGGATCCATGCATG".repeat(1_000);
    let genome = Genome::from_tag("linear", &sequence).unwrap();

    let scalar = ApproximateScanner::new();
    let parallel = ApproximateScanner::with_parallel(4);
    assert!(parallel.will_use_parallel(genome.len()));

    assert_eq!(
        scalar.scan(&genome, "GGATCC", 1).unwrap(),
        parallel.scan(&genome, "GGATCC", 1).unwrap()
    );
}

#[test]
fn test_concurrent_read_only_use() {
    // A Genome is immutable post-construction; scans from multiple
    // threads need no locking
    let genome = std::sync::Arc::new(Genome::from_tag("linear", "GAGCCATGATGGGATCC").unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let genome = std::sync::Arc::clone(&genome);
            std::thread::spawn(move || {
                assert_eq!(count_pattern(&genome, "ATG").unwrap(), 2);
                assert_eq!(minimum_skew(&genome), vec![0, 5, 6, 7]);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
