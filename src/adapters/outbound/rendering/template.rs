//! Built-in Tera templates for the credits document.

/// Template name under which [`MACROS`] is registered
pub const MACROS_NAME: &str = "macros.md";

/// Template name under which the document template is registered
pub const CREDITS_NAME: &str = "credits.md";

/// Table row macro, importable from custom templates with
/// `{% import "macros.md" as macros %}`.
pub const MACROS: &str = r#"{% macro dep_line(dep) -%}
[`{{ dep.name }}`](https://pypi.org/project/{{ dep.name }}/) | {{ dep.summary }} | {% if dep.spec %}`{{ dep.spec }}`{% endif %} | `{{ dep.version }}` | {{ dep.license }}
{%- endmacro dep_line %}"#;

pub const DEFAULT_TEMPLATE: &str = r#"{% import "macros.md" as macros -%}
We gratefully acknowledge
ASEE, NSF, DARPA, NASA, and AFOSR for funding parts of this project.

We thank Athreyi Badithela for creating the artwork.

The following projects were used to build `{{ project_name }}`:

[`python`](https://www.python.org/) |
[`pdm`](https://pdm.fming.dev/) |
[`copier-pdm`](https://github.com/pawamoy/copier-pdm)

### Runtime dependencies

Project | Summary | Version (accepted) | Version (last resolved) | License
------- | ------- | ------------------ | ----------------------- | -------
{% for dep in prod_dependencies -%}
{{ macros::dep_line(dep=dep) }}
{% endfor %}
### Development dependencies

Project | Summary | Version (accepted) | Version (last resolved) | License
------- | ------- | ------------------ | ----------------------- | -------
{% for dep in dev_dependencies -%}
{{ macros::dep_line(dep=dep) }}
{% endfor -%}
{% if more_credits %}
**[More credits from the author]({{ more_credits }})**
{% endif -%}
"#;
