//! 区ごとの装飾画像の割り当て
//!
//! IDのハッシュで画像プールから1枚を選ぶ。同じIDは常に同じ画像になる。

const MANHATTAN: &[&str] = &[
    "https://images.unsplash.com/photo-1469474968028-56623f02e42e?auto=format&fit=crop&w=900&q=80",
    "https://images.unsplash.com/photo-1496560544814-23451c93d1d2?auto=format&fit=crop&w=900&q=80",
];

const BROOKLYN: &[&str] = &[
    "https://images.unsplash.com/photo-1501785888041-af3ef285b470?auto=format&fit=crop&w=900&q=80",
    "https://images.unsplash.com/photo-1454412685993-0f47fa10ecc2?auto=format&fit=crop&w=900&q=80",
];

const QUEENS: &[&str] = &[
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=900&q=80",
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?auto=format&fit=crop&w=900&q=80",
];

const BRONX: &[&str] = &[
    "https://images.unsplash.com/photo-1500534314209-a25ddb2bd429?auto=format&fit=crop&w=900&q=80",
    "https://images.unsplash.com/photo-1504610926078-a1611febcad3?auto=format&fit=crop&w=900&q=80",
];

const STATEN_ISLAND: &[&str] = &[
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=900&q=80",
    "https://images.unsplash.com/photo-1501785888041-af3ef285b470?auto=format&fit=crop&w=900&q=80",
];

const UNKNOWN: &[&str] = &[
    "https://images.unsplash.com/photo-1470770841072-f978cf4d019e?auto=format&fit=crop&w=900&q=80",
];

fn pool_for(borough_label: &str) -> &'static [&'static str] {
    match borough_label {
        "Manhattan" => MANHATTAN,
        "Brooklyn" => BROOKLYN,
        "Queens" => QUEENS,
        "Bronx" => BRONX,
        "Staten Island" => STATEN_ISLAND,
        _ => UNKNOWN,
    }
}

/// 32bit文字列ハッシュ（h * 31 + c、UTF-16単位、オーバーフローは折り返し）
pub fn hash_string(value: &str) -> u32 {
    let hash = value
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit))
        });
    hash.unsigned_abs()
}

/// 区名とIDから画像URLを選ぶ
pub fn pick_image(borough_label: &str, id: &str) -> &'static str {
    let pool = pool_for(borough_label);
    pool[hash_string(id) as usize % pool.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_string_known_values() {
        assert_eq!(hash_string(""), 0);
        assert_eq!(hash_string("a"), 97);
        // "ab" = 97 * 31 + 98
        assert_eq!(hash_string("ab"), 3105);
    }

    #[test]
    fn test_hash_string_wraps_without_panic() {
        let long = "prospect-park-".repeat(200);
        let _ = hash_string(&long);
    }

    #[test]
    fn test_pick_image_is_deterministic() {
        let first = pick_image("Brooklyn", "12345");
        let second = pick_image("Brooklyn", "12345");
        assert_eq!(first, second);
        assert!(BROOKLYN.contains(&first));
    }

    #[test]
    fn test_unknown_borough_uses_fallback_pool() {
        assert_eq!(pick_image("Unknown borough", "x"), UNKNOWN[0]);
        assert_eq!(pick_image("", "y"), UNKNOWN[0]);
    }
}
