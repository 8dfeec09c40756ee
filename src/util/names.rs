use std::collections::HashSet;

use rand::Rng;

use crate::{
    error::{Error, Result},
    util::types::Size,
};

const ALPHABET_LEN: Size = 26;

///Random uppercase ASCII name, used for table names and added columns
pub fn random_name<R: Rng + ?Sized>(rng: &mut R, len: Size) -> String {
    (0..len)
        .map(|_| char::from(rng.gen_range(b'A'..=b'Z')))
        .collect()
}

///`count` distinct random lowercase names of length `len`, none of which appear in `taken`.
/// `taken` is compared case-insensitively since unquoted SQL identifiers are case folded
pub fn unique_random_names<R: Rng + ?Sized>(
    rng: &mut R,
    count: Size,
    len: Size,
    taken: &HashSet<String>,
) -> Result<Vec<String>> {
    let available = u32::try_from(len)
        .ok()
        .and_then(|len| ALPHABET_LEN.checked_pow(len))
        .unwrap_or(Size::MAX);
    if len == 0 || available.saturating_sub(taken.len()) < count {
        return Err(Error::InvalidSpec(format!(
            "cannot draw {count} unused names of length {len}"
        )));
    }

    let mut used: HashSet<String> = taken.iter().map(|name| name.to_lowercase()).collect();
    let mut names = Vec::with_capacity(count);
    while names.len() < count {
        let name = random_name(rng, len).to_lowercase();
        if used.insert(name.clone()) {
            names.push(name);
        }
    }
    Ok(names)
}

///Random lowercase column names for the standalone generator
pub fn random_column_names<R: Rng + ?Sized>(
    rng: &mut R,
    count: Size,
    len: Size,
) -> Result<Vec<String>> {
    unique_random_names(rng, count, len, &HashSet::new())
}

///Deterministic column names: a..z, then aa..zz, then aaa..zzz and so on
pub fn alphabet_column_names(count: Size) -> Vec<String> {
    (0..count)
        .map(|i| {
            let letter = char::from(b'a' + (i % ALPHABET_LEN) as u8);
            letter.to_string().repeat(i / ALPHABET_LEN + 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_name_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [1, 6, 12] {
            let name = random_name(&mut rng, len);
            assert_eq!(name.len(), len);
            assert!(name.chars().all(|c| c.is_ascii_uppercase()));
        }
        assert_eq!(random_name(&mut rng, 0), "");
    }

    #[test]
    fn test_random_column_names() {
        let mut rng = StdRng::seed_from_u64(42);
        let names = random_column_names(&mut rng, 20, 6).unwrap();
        assert_eq!(names.len(), 20);
        assert!(names
            .iter()
            .all(|name| name.len() == 6 && name.chars().all(|c| c.is_ascii_lowercase())));

        let distinct: HashSet<&String> = names.iter().collect();
        assert_eq!(distinct.len(), names.len());
    }

    #[test]
    fn test_unique_names_avoid_taken() {
        let mut rng = StdRng::seed_from_u64(3);
        //every single letter name except "q" is taken
        let taken: HashSet<String> = alphabet_column_names(26)
            .into_iter()
            .filter(|name| name != "q")
            .map(|name| name.to_uppercase())
            .collect();
        let names = unique_random_names(&mut rng, 1, 1, &taken).unwrap();
        assert_eq!(names, vec!["q".to_string()]);
    }

    #[test]
    fn test_unique_names_exhausted() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            random_column_names(&mut rng, 27, 1),
            Err(Error::InvalidSpec(_))
        ));
        assert!(matches!(
            random_column_names(&mut rng, 1, 0),
            Err(Error::InvalidSpec(_))
        ));
    }

    #[test]
    fn test_alphabet_column_names() {
        let names = alphabet_column_names(30);
        assert_eq!(names[0], "a");
        assert_eq!(names[25], "z");
        assert_eq!(names[26], "aa");
        assert_eq!(names[29], "dd");

        let distinct: HashSet<&String> = names.iter().collect();
        assert_eq!(distinct.len(), 30);
        assert!(alphabet_column_names(0).is_empty());
    }
}
