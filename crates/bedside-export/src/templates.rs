//! Built-in text templates. Names end in `.txt` so Tera never HTML-escapes
//! them.

pub const OUTCOME: &str = "outcome.txt";
pub const BLOOD_GAS_SUMMARY: &str = "blood_gas_summary.txt";
pub const SELF_TEST: &str = "self_test.txt";

const OUTCOME_TEMPLATE: &str = "\
{{ name }}{% if not complete %} (incomplete){% endif %}
{% if tone_marker %}[{{ tone }}] {% endif %}{{ headline }}
{% if show_details %}{% for d in details %}  {{ d.label }}: {{ d.value }}
{% endfor %}{% endif %}{% if footnote %}{{ footnote }}
{% endif %}";

const BLOOD_GAS_SUMMARY_TEMPLATE: &str = "\
Blood gas summary
pH {{ ph }} | PaCO₂ {{ paco2 }} mmHg | HCO₃⁻ {{ hco3 }} mmol/L
PaO₂ {{ pao2 }} mmHg on FiO₂ {{ fio2 }} | P/F {{ pf_ratio }}
PAO₂ {{ alveolar_oxygen }} mmHg | A–a gradient {{ aa_gradient }} mmHg
Anion gap {{ anion_gap }} mmol/L | corrected {{ corrected_anion_gap }} mmol/L (albumin {{ albumin }} g/dL)
Primary disorder: {{ disorder }}
";

const SELF_TEST_TEMPLATE: &str = "\
Built-in tests: {% if all_pass %}OK{% else %}FAILED{% endif %} ({{ passed }}/{{ total }})
{% for c in cases %}{{ c.name }}: expected {{ c.expected }} / got {{ c.actual }} — {% if c.pass %}OK{% else %}KO{% endif %}
{% endfor %}";

pub fn builtin(name: &str) -> Option<&'static str> {
    match name {
        OUTCOME => Some(OUTCOME_TEMPLATE),
        BLOOD_GAS_SUMMARY => Some(BLOOD_GAS_SUMMARY_TEMPLATE),
        SELF_TEST => Some(SELF_TEST_TEMPLATE),
        _ => None,
    }
}
