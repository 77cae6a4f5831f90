use std::{
    convert::Infallible,
    fmt::{self, Display},
    str::FromStr,
};

/// 言語、国、バリアントの組み合わせ。
///
/// 作成後に値を変更する手段はない。値は検証も正規化もせず、渡されたまま保持する。
/// `Default`は、すべて空文字列のルートロケールとなる。
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: String,
    variant: String,
}

impl Locale {
    /// 言語のみを指定して`Locale`を作成する。
    ///
    /// 国とバリアントは空文字列となる。
    pub fn new(language: impl Into<String>) -> Locale {
        Locale::with_variant(language, "", "")
    }

    /// 言語と国を指定して`Locale`を作成する。
    pub fn with_country(language: impl Into<String>, country: impl Into<String>) -> Locale {
        Locale::with_variant(language, country, "")
    }

    /// `Locale`を作成する。
    ///
    /// # 引数
    ///
    /// - language: 言語。
    /// - country: 国。
    /// - variant: バリアント。
    ///
    /// # 戻り値
    ///
    /// `Locale`インスタンス。
    pub fn with_variant(
        language: impl Into<String>,
        country: impl Into<String>,
        variant: impl Into<String>,
    ) -> Locale {
        Locale {
            language: language.into(),
            country: country.into(),
            variant: variant.into(),
        }
    }

    /// 言語を返却する。
    pub fn language(&self) -> &str {
        &self.language
    }

    /// 国を返却する。
    pub fn country(&self) -> &str {
        &self.country
    }

    /// バリアントを返却する。
    pub fn variant(&self) -> &str {
        &self.variant
    }
}

/// `language_COUNTRY_variant`の形式で出力する。
///
/// 空の要素の区切り文字は、後ろに続く要素があるときだけ出力する。
/// ルートロケールは空文字列となる。
impl Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_language = !self.language.is_empty();
        let has_country = !self.country.is_empty();
        let has_variant = !self.variant.is_empty();

        f.write_str(&self.language)?;
        if has_country || (has_variant && has_language) {
            write!(f, "_{}", self.country)?;
        }
        if has_variant && (has_language || has_country) {
            write!(f, "_{}", self.variant)?;
        }

        Ok(())
    }
}

/// 最初の2つの`_`で、言語、国、バリアントに分割する。
///
/// バリアントには残りの`_`がそのまま含まれる。分割は失敗しない。
/// 言語と国に`_`が含まれない場合に限り、`Display`の出力を分割すると元の値と等しくなる。
/// 言語や国に`_`が含まれる場合は、その位置で分割される。
impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Locale, Infallible> {
        let mut parts = s.splitn(3, '_');
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        let variant = parts.next().unwrap_or_default();

        Ok(Locale::with_variant(language, country, variant))
    }
}
