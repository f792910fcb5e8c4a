//! `urlbuf`: URL query assembly and decoding over the chain buffer.
//!
//! A [`Query`] is a chain that knows the wire rules of
//! `application/x-www-form-urlencoded` key/value pairs: unreserved bytes
//! pass through, space becomes `+`, everything else becomes `%HH` with
//! uppercase hex. The first pair is preceded by `?` and later pairs by `&`,
//! and the byte region after the `?` can be decoded back into a map.
//!
//! ```
//! use urlbuf::Query;
//!
//! let mut query = Query::from("https://kat.plus/user");
//! query.set("name").unwrap().add("kraity").unwrap();
//! query.set("page").unwrap().add_int(2).unwrap();
//!
//! assert_eq!(query.to_url(), "https://kat.plus/user?name=kraity&page=2");
//! ```

mod query;

pub use query::Query;
