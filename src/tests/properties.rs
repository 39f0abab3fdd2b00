use proptest::{collection::vec, prelude::*, sample::Index};

use super::support::Recorder;
use crate::SentenceAssembler;

fn sentence() -> impl Strategy<Value = String> {
    "[$!][A-Z]{5}(,[ -~]{0,12}){0,6}"
}

fn garbage() -> impl Strategy<Value = String> {
    "([a-zA-Z0-9,.*][ -~]{0,20})?"
}

/// Lines of a stream, each flagged with whether it is a sentence.
fn stream() -> impl Strategy<Value = Vec<(bool, String)>> {
    vec(
        prop_oneof![
            sentence().prop_map(|s| (true, s)),
            garbage().prop_map(|g| (false, g)),
        ],
        0..12,
    )
}

fn encode(lines: &[(bool, String)]) -> Vec<u8> {
    lines
        .iter()
        .flat_map(|(is_sentence, line)| {
            let end = if *is_sentence { "\r\n" } else { "\n" };
            format!("{line}{end}").into_bytes()
        })
        .collect()
}

fn expected(lines: &[(bool, String)]) -> Vec<String> {
    lines
        .iter()
        .filter(|(is_sentence, _)| *is_sentence)
        .map(|(_, line)| trimmed(line))
        .collect()
}

fn trimmed(line: &str) -> String {
    line.trim_end_matches([' ', '\t', '\r', '\n']).to_string()
}

/// Cuts `bytes` into non-empty chunks at the given points.
fn chunked<'a>(bytes: &'a [u8], cuts: &[Index]) -> Vec<&'a [u8]> {
    let mut points: Vec<usize> = cuts.iter().map(|i| i.index(bytes.len() + 1)).collect();
    points.push(0);
    points.push(bytes.len());
    points.sort_unstable();
    points.dedup();

    points.windows(2).map(|w| &bytes[w[0]..w[1]]).collect()
}

/// Feeds each chunk stamped with its position.
fn assemble(chunks: &[&[u8]]) -> Vec<(String, usize)> {
    let mut assembler = SentenceAssembler::new(Recorder::<usize>::default());
    for (i, chunk) in chunks.iter().enumerate() {
        assembler.feed(chunk, i).unwrap();
    }

    assembler.into_sink().sentences
}

fn texts(sentences: Vec<(String, usize)>) -> Vec<String> {
    sentences.into_iter().map(|(s, _)| s).collect()
}

proptest! {
    #[test]
    fn test_split_invariance(body in sentence(), cuts in vec(any::<Index>(), 0..8)) {
        let raw = format!("{body}\r\n");
        let chunks = chunked(raw.as_bytes(), &cuts);

        let sentences = assemble(&chunks);

        prop_assert_eq!(sentences, vec![(trimmed(&body), chunks.len() - 1)]);
    }

    #[test]
    fn test_whole_stream_in_one_chunk(lines in stream()) {
        let raw = encode(&lines);

        prop_assert_eq!(texts(assemble(&[raw.as_slice()])), expected(&lines));
    }

    #[test]
    fn test_framing_ignores_chunking(lines in stream(), cuts in vec(any::<Index>(), 0..24)) {
        let raw = encode(&lines);

        prop_assert_eq!(texts(assemble(&chunked(&raw, &cuts))), expected(&lines));
    }

    #[test]
    fn test_garbage_rejection(lines in vec(garbage(), 0..12), cuts in vec(any::<Index>(), 0..24)) {
        let raw: Vec<u8> = lines.iter().flat_map(|l| format!("{l}\n").into_bytes()).collect();

        prop_assert!(assemble(&chunked(&raw, &cuts)).is_empty());
    }

    #[test]
    fn test_empty_chunks_are_no_ops(lines in stream(), cuts in vec(any::<Index>(), 0..24)) {
        let raw = encode(&lines);
        let chunks = chunked(&raw, &cuts);
        let padded: Vec<&[u8]> = chunks.iter().flat_map(|c| [&b""[..], *c]).collect();

        prop_assert_eq!(texts(assemble(&padded)), expected(&lines));
    }
}
