/// Split a full name into `(last_name, first_name)`.
///
/// The roster doesn't tell which part of a name is the last name, so a fixed rule is applied:
/// - one token: last name only;
/// - two tokens: last name then first name;
/// - `n` tokens, `n >= 3`: the first `min(3, n / 2)` tokens are the last name, the rest is the first name.
///
/// Previously imported records rely on this exact rule: changing it would change their identity.
pub fn split_name(full_name: &str) -> (String, String) {
    let tokens = full_name.split_whitespace().collect::<Vec<_>>();
    let last_name_length = match tokens.len() {
        0 | 1 => tokens.len(),
        2 => 1,
        n => (n / 2).min(3),
    };
    let (last_name, first_name) = tokens.split_at(last_name_length);

    (last_name.join(" "), first_name.join(" "))
}
