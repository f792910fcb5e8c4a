use bytechain::{Chain, Error};

#[test]
fn cursor_walks_the_content_once() {
    let chain = Chain::from("kat");
    let mut reader = chain.reader();

    assert!(reader.also());
    assert_eq!(reader.read(), b'k');
    assert_eq!(reader.read(), b'a');
    assert_eq!(reader.read(), b't');
    assert!(!reader.also());
}

#[test]
fn next_byte_fails_at_the_end() {
    let chain = Chain::from("k");
    let mut reader = chain.reader();

    assert_eq!(reader.next_byte(), Ok(b'k'));
    assert_eq!(
        reader.next_byte(),
        Err(Error::EndOfStream { cursor: 1, end: 1 })
    );
}

#[test]
fn slip_repositions_the_cursor() {
    let chain = Chain::from("kat");
    let mut reader = chain.reader();

    reader.read();
    reader.slip(0);
    assert_eq!(reader.read(), b'k');

    reader.slip(2);
    assert_eq!(reader.read(), b't');
    assert!(!reader.also());

    // slipping past the end just leaves nothing to read
    reader.slip(9);
    assert!(!reader.also());
    assert!(reader.next_byte().is_err());
}

#[test]
fn close_severs_the_view() {
    let chain = Chain::from("kat");
    let mut reader = chain.reader();
    reader.read();
    reader.close();

    assert!(!reader.also());
    assert!(reader.next_byte().is_err());

    // closing the reader never touches the chain
    assert_eq!(chain.to_string(), "kat");
}

#[test]
fn range_readers_are_bounded() {
    let chain = Chain::from("kat.plus");
    let reader = chain.reader_range(4, 4).unwrap();
    assert_eq!(reader.collect::<Vec<_>>(), b"plus");

    assert!(chain.reader_range(5, 4).is_err());
}

#[test]
fn reader_drains_as_an_iterator() {
    let chain = Chain::from("kat");
    let reader = chain.reader();

    assert_eq!(reader.size_hint(), (3, Some(3)));
    assert_eq!(reader.collect::<Vec<_>>(), b"kat");
}

#[test]
fn reader_serves_as_a_byte_source() {
    let chain = Chain::from("kat.plus");
    let mut reader = chain.reader();

    let mut copy = Chain::new();
    copy.concat_stream(&mut reader, usize::MAX).unwrap();
    assert_eq!(copy, chain);
}

#[test]
fn an_exhausted_reader_is_an_empty_byte_source() {
    let chain = Chain::from("kat");
    let mut copy = Chain::new();

    // slipped past the end
    let mut reader = chain.reader();
    reader.slip(9);
    assert_eq!(copy.concat_stream(&mut reader, usize::MAX).unwrap(), 0);

    // closed mid-read
    let mut reader = chain.reader();
    reader.read();
    reader.close();
    assert_eq!(copy.concat_stream(&mut reader, usize::MAX).unwrap(), 0);
    assert!(copy.is_empty());
}
