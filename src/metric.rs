//! TSPLIB header tokens understood by the instance writer.

use tsplib_derive::TsplibToken;

/// TSPLIB `EDGE_WEIGHT_TYPE` values accepted by Concorde.
///
/// Tokens match case-sensitively, so `"euc_2d"` is rejected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, TsplibToken)]
#[tsplib(error = "invalid_metric")]
pub enum EdgeWeightType {
    Explicit,
    #[tsplib("EUC_2D")]
    Euc2d,
    #[tsplib("EUC_3D")]
    Euc3d,
    #[tsplib("MAX_2D")]
    Max2d,
    #[tsplib("MAN_2D")]
    Man2d,
    Geo,
    Geom,
    Att,
    #[tsplib("CEIL_2D")]
    Ceil2d,
    Dsjrand,
}

impl EdgeWeightType {
    pub const fn is_explicit(self) -> bool {
        matches!(self, Self::Explicit)
    }
}

/// TSPLIB `EDGE_WEIGHT_FORMAT` values. Only full matrices are written.
#[derive(Clone, Copy, Debug, Eq, PartialEq, TsplibToken)]
pub enum EdgeWeightFormat {
    FullMatrix,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{EdgeWeightFormat, EdgeWeightType};
    use crate::Error;

    #[rstest]
    #[case("EXPLICIT", EdgeWeightType::Explicit)]
    #[case("EUC_2D", EdgeWeightType::Euc2d)]
    #[case("EUC_3D", EdgeWeightType::Euc3d)]
    #[case("MAX_2D", EdgeWeightType::Max2d)]
    #[case("MAN_2D", EdgeWeightType::Man2d)]
    #[case("GEO", EdgeWeightType::Geo)]
    #[case("GEOM", EdgeWeightType::Geom)]
    #[case("ATT", EdgeWeightType::Att)]
    #[case("CEIL_2D", EdgeWeightType::Ceil2d)]
    #[case("DSJRAND", EdgeWeightType::Dsjrand)]
    fn parses_and_displays_every_token(#[case] token: &str, #[case] expected: EdgeWeightType) {
        let parsed: EdgeWeightType = token.parse().expect("known token");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), token);
    }

    #[test]
    fn tokens_cover_every_variant_in_order() {
        assert_eq!(EdgeWeightType::TOKENS.len(), EdgeWeightType::ALL.len());
        assert_eq!(EdgeWeightType::TOKENS.len(), 10);
        for (token, metric) in EdgeWeightType::TOKENS.iter().zip(EdgeWeightType::ALL) {
            assert_eq!(metric.to_string(), *token);
        }
    }

    #[rstest]
    #[case("euc_2d")]
    #[case("EUC2D")]
    #[case("")]
    #[case("FULL_MATRIX")]
    fn rejects_unknown_tokens_listing_valid_set(#[case] token: &str) {
        let err = token.parse::<EdgeWeightType>().expect_err("unknown token");
        let Error::InvalidMetric {
            field,
            given,
            expected,
        } = &err
        else {
            panic!("expected invalid metric, got {err:?}");
        };
        assert_eq!(*field, "EDGE_WEIGHT_TYPE");
        assert_eq!(given, token);
        for valid in EdgeWeightType::TOKENS {
            assert!(expected.contains(valid), "{valid} missing from {expected}");
        }
    }

    #[test]
    fn only_explicit_reports_explicit() {
        let explicit: Vec<_> = EdgeWeightType::ALL
            .iter()
            .filter(|metric| metric.is_explicit())
            .collect();
        assert_eq!(explicit, vec![&EdgeWeightType::Explicit]);
    }

    #[test]
    fn full_matrix_token() {
        assert_eq!(EdgeWeightFormat::FullMatrix.to_string(), "FULL_MATRIX");
        assert!(matches!(
            "FULL_MATRIX".parse::<EdgeWeightFormat>(),
            Ok(EdgeWeightFormat::FullMatrix)
        ));
        assert!(matches!(
            "UPPER_ROW".parse::<EdgeWeightFormat>(),
            Err(Error::InvalidValue { .. })
        ));
    }
}
