use std::string::ToString;
use url::form_urlencoded;

/// Appends a query string to an endpoint.
pub fn append_query<Q>(mut ep: String, query: Q) -> String
where
    Q: AsRef<str>,
{
    ep.push('?');
    ep.push_str(query.as_ref());
    ep
}

/// Encodes `key` and `val` as a urlencoded pair.
pub fn encoded_pair<K, V>(key: K, val: V) -> String
where
    K: AsRef<str>,
    V: ToString,
{
    form_urlencoded::Serializer::new(String::new())
        .append_pair(key.as_ref(), &val.to_string())
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_pair_is_urlencoded() {
        assert_eq!(encoded_pair("key", "a b+c"), "key=a+b%2Bc");
    }

    #[test]
    fn query_is_appended_after_a_question_mark() {
        let ep = append_query("https://example.com/generate".into(), "key=abc");
        assert_eq!(ep, "https://example.com/generate?key=abc");
    }
}
