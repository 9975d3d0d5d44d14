use tf_idf_bag::{Bag, BagConfig, SentencePolicy};

fn main() {
    // build options
    let config = BagConfig::new()
        .with_normalize(true)
        .with_remove_stop_words(true)
        .with_max_ngram_length(2)
        .with_sentence_policy(SentencePolicy::SplitBeforeCleaning);

    let documents = [
        "Rust is fast. Rust is safe!",
        "The borrow checker keeps Rust safe. Is it fast?",
        "Garbage collectors are not fast.",
    ];

    let bag: Bag = match Bag::build(&documents, &config) {
        Ok(bag) => bag,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    // print result
    println!("corpus:");
    for term in bag.top_terms(5) {
        println!("  {} freq={} idf={:.3}", term.term, term.frequency, term.idf);
    }
    for (i, doc) in bag.documents().iter().enumerate() {
        println!("doc{} {:?}", i + 1, doc.sentences);
        for term in doc.top_terms(3) {
            println!("  {} tfidf={:.3} sentences={:?}", term.term, term.tfidf, term.sentence_indices);
        }
    }
}
