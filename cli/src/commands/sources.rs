use calcul_common::models::source_kind::SourceKind;
use calcul_core::wiring;

use crate::terminal::print;

pub fn sources() {
    for kind in SourceKind::ALL {
        let source = wiring::data_source(kind);
        print::aligned_line(kind.as_str(), source.tag());
    }
}
