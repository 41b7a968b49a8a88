/// Given an invalid input and a list of valid options, returns the options
/// close enough to the input to be worth suggesting, best match first.
///
/// Closeness is the Damerau-Levenshtein distance between the lowercased
/// strings; an option is kept when its distance is within
/// `floor(len(input) * 0.4) + 1`. Ties are broken alphabetically.
pub fn suggestion_list<'o>(input: &str, options: impl IntoIterator<Item = &'o str>) -> Vec<String> {
    let mut lexical = LexicalDistance::new(input);
    let threshold = input.chars().count() * 4 / 10 + 1;
    let mut scored = options
        .into_iter()
        .filter_map(|option| {
            lexical
                .measure(option, threshold)
                .map(|distance| (distance, option))
        })
        .collect::<Vec<_>>();
    scored.sort_by(|(dist_a, a), (dist_b, b)| dist_a.cmp(dist_b).then_with(|| natural_cmp(a, b)));
    scored
        .into_iter()
        .map(|(_, option)| option.to_string())
        .collect()
}

/// Renders up to five suggestions as a trailing " Did you mean ...?"
/// sentence, or an empty string when there are none.
///
/// `sub_message` names what is suggested, e.g. `"the enum value"`.
pub fn did_you_mean(suggestions: &[String], sub_message: Option<&str>) -> String {
    const MAX_SUGGESTIONS: usize = 5;
    if suggestions.is_empty() {
        return String::new();
    }
    let mut message = " Did you mean ".to_string();
    if let Some(sub_message) = sub_message {
        message.push_str(sub_message);
        message.push(' ');
    }
    let quoted = suggestions
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|s| format!("'{s}'"))
        .collect::<Vec<_>>();
    match quoted.as_slice() {
        [only] => message.push_str(only),
        [first, second] => message.push_str(&format!("{first} or {second}")),
        [init @ .., last] => {
            message.push_str(&init.join(", "));
            message.push_str(", or ");
            message.push_str(last);
        },
        [] => {},
    }
    message.push('?');
    message
}

/// Compares strings so that embedded digit runs order numerically:
/// `"a2" < "a10"`.
pub(crate) fn natural_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let start_i = i;
            while i < a.len() && a[i].is_ascii_digit() {
                i += 1;
            }
            let start_j = j;
            while j < b.len() && b[j].is_ascii_digit() {
                j += 1;
            }
            let num_a = std::str::from_utf8(&a[start_i..i])
                .ok()
                .and_then(|s| s.parse::<u128>().ok());
            let num_b = std::str::from_utf8(&b[start_j..j])
                .ok()
                .and_then(|s| s.parse::<u128>().ok());
            match num_a.cmp(&num_b) {
                std::cmp::Ordering::Equal => continue,
                other => return other,
            }
        }
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            },
            other => return other,
        }
    }
    (a.len() - i).cmp(&(b.len() - j))
}

/// Damerau-Levenshtein distance against a fixed input, reusing its
/// buffers across measurements.
struct LexicalDistance {
    input: String,
    input_lower: Vec<char>,
    rows: [Vec<usize>; 3],
}

impl LexicalDistance {
    fn new(input: &str) -> Self {
        let input_lower = input.to_lowercase().chars().collect::<Vec<_>>();
        let width = input_lower.len() + 1;
        Self {
            input: input.to_string(),
            input_lower,
            rows: [vec![0; width], vec![0; width], vec![0; width]],
        }
    }

    fn measure(&mut self, option: &str, threshold: usize) -> Option<usize> {
        if self.input == option {
            return Some(0);
        }
        let option_lower = option.to_lowercase().chars().collect::<Vec<_>>();

        // Any case change counts as a single edit.
        if self.input_lower == option_lower {
            return Some(1);
        }

        let (a, b) = if option_lower.len() > self.input_lower.len() {
            (&option_lower, &self.input_lower)
        } else {
            (&self.input_lower, &option_lower)
        };
        let (a_len, b_len) = (a.len(), b.len());
        if a_len - b_len > threshold {
            return None;
        }

        let width = b_len + 1;
        for row in &mut self.rows {
            row.clear();
            row.resize(width, 0);
        }
        for (j, cell) in self.rows[0].iter_mut().enumerate() {
            *cell = j;
        }

        for i in 1..=a_len {
            let (up_up, up, current) = (
                (i + 1) % 3,
                (i - 1) % 3,
                i % 3,
            );
            self.rows[current][0] = i;
            let mut smallest_cell = i;
            for j in 1..=b_len {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                let mut cell = (self.rows[up][j] + 1)
                    .min(self.rows[current][j - 1] + 1)
                    .min(self.rows[up][j - 1] + cost);
                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    // Transposition.
                    cell = cell.min(self.rows[up_up][j - 2] + 1);
                }
                smallest_cell = smallest_cell.min(cell);
                self.rows[current][j] = cell;
            }
            if smallest_cell > threshold {
                return None;
            }
        }

        let distance = self.rows[a_len % 3][b_len];
        (distance <= threshold).then_some(distance)
    }
}
