//! Parser for the OpenQASM 2.0 interchange subset.

use mimir_ir::{Circuit, CustomGate, Gate, GateKind, QubitId, StandardGate};

use crate::error::{QasmError, QasmResult};
use crate::lexer::{Spanned, Token, tokenize};

/// Parse QASM 2.0 source into a circuit.
///
/// The subset understood here is line-oriented: a version header, an
/// optional include, a single `qreg` declaration, and one gate instruction
/// per line. Gate names outside the standard vocabulary become custom
/// gates with the operand count as arity. `cnot` is accepted as an alias
/// of `cx`, `u3` as an alias of `u`.
pub fn parse(source: &str) -> QasmResult<Circuit> {
    let tokens = tokenize(source).map_err(|line| QasmError::InvalidToken { line })?;
    Parser {
        tokens,
        pos: 0,
        register: None,
    }
    .parse()
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    /// Declared qubit register: (name, size).
    register: Option<(String, u32)>,
}

impl Parser {
    fn parse(mut self) -> QasmResult<Circuit> {
        self.expect_version()?;

        let mut gates: Vec<(Gate, usize)> = vec![];
        while let Some(spanned) = self.peek() {
            let line = spanned.line;
            match spanned.token.clone() {
                Token::Include => {
                    self.advance();
                    self.expect(
                        |t| matches!(t, Token::StringLiteral(_)),
                        "include file name",
                    )?;
                    self.expect(|t| matches!(t, Token::Semicolon), "';'")?;
                }
                Token::Qreg => {
                    self.advance();
                    let name = self.expect_identifier("register name")?;
                    if self.register.is_some() {
                        return Err(QasmError::DuplicateRegister(name));
                    }
                    self.expect(|t| matches!(t, Token::LBracket), "'['")?;
                    let size = self.expect_int("register size")?;
                    self.expect(|t| matches!(t, Token::RBracket), "']'")?;
                    self.expect(|t| matches!(t, Token::Semicolon), "';'")?;
                    self.register = Some((name, size as u32));
                }
                Token::Creg => {
                    // Classical registers carry no estimation content; accept
                    // and discard the declaration.
                    self.advance();
                    self.expect_identifier("register name")?;
                    self.expect(|t| matches!(t, Token::LBracket), "'['")?;
                    self.expect_int("register size")?;
                    self.expect(|t| matches!(t, Token::RBracket), "']'")?;
                    self.expect(|t| matches!(t, Token::Semicolon), "';'")?;
                }
                Token::Identifier(name) => {
                    self.advance();
                    let gate = self.parse_gate_instruction(&name, line)?;
                    gates.push((gate, line));
                }
                other => {
                    return Err(QasmError::UnsupportedStatement {
                        line,
                        statement: format!("{other:?}"),
                    });
                }
            }
        }

        let (_, size) = self.register.ok_or(QasmError::MissingRegister)?;
        let mut circuit = Circuit::new("from-qasm", size)?;
        for (gate, _line) in gates {
            circuit.push(gate)?;
        }
        Ok(circuit)
    }

    fn parse_gate_instruction(&mut self, name: &str, line: usize) -> QasmResult<Gate> {
        let params = if matches!(self.peek_token(), Some(Token::LParen)) {
            self.advance();
            let mut params = vec![self.parse_param()?];
            while matches!(self.peek_token(), Some(Token::Comma)) {
                self.advance();
                params.push(self.parse_param()?);
            }
            self.expect(|t| matches!(t, Token::RParen), "')'")?;
            params
        } else {
            vec![]
        };

        let mut qubits = vec![self.parse_operand(line)?];
        while matches!(self.peek_token(), Some(Token::Comma)) {
            self.advance();
            qubits.push(self.parse_operand(line)?);
        }
        self.expect(|t| matches!(t, Token::Semicolon), "';'")?;

        let kind = gate_kind(name, &params, qubits.len(), line)?;
        Ok(Gate::new(kind, qubits)?)
    }

    /// Parse one `name[index]` operand against the declared register.
    fn parse_operand(&mut self, line: usize) -> QasmResult<QubitId> {
        let reg = self.expect_identifier("qubit operand")?;
        let (declared, _) = self.register.as_ref().ok_or(QasmError::MissingRegister)?;
        if &reg != declared {
            return Err(QasmError::UnknownRegister {
                line,
                expected: declared.clone(),
                found: reg,
            });
        }
        self.expect(|t| matches!(t, Token::LBracket), "'['")?;
        let index = self.expect_int("qubit index")?;
        self.expect(|t| matches!(t, Token::RBracket), "']'")?;
        Ok(QubitId(index as u32))
    }

    /// Parse one parameter expression: `[-] (pi [/ n] | n [* pi])`.
    fn parse_param(&mut self) -> QasmResult<f64> {
        let negative = if matches!(self.peek_token(), Some(Token::Minus)) {
            self.advance();
            true
        } else {
            false
        };

        let value = match self.next_token("parameter")? {
            (Token::Pi, _) => {
                if matches!(self.peek_token(), Some(Token::Slash)) {
                    self.advance();
                    let divisor = self.expect_number("divisor")?;
                    std::f64::consts::PI / divisor
                } else {
                    std::f64::consts::PI
                }
            }
            (Token::FloatLiteral(v), _) => self.maybe_times_pi(v)?,
            (Token::IntLiteral(v), _) => self.maybe_times_pi(v as f64)?,
            (found, line) => {
                return Err(QasmError::UnexpectedToken {
                    line,
                    expected: "parameter",
                    found: format!("{found:?}"),
                });
            }
        };

        Ok(if negative { -value } else { value })
    }

    fn maybe_times_pi(&mut self, value: f64) -> QasmResult<f64> {
        if matches!(self.peek_token(), Some(Token::Star)) {
            self.advance();
            self.expect(|t| matches!(t, Token::Pi), "'pi'")?;
            Ok(value * std::f64::consts::PI)
        } else {
            Ok(value)
        }
    }

    fn expect_version(&mut self) -> QasmResult<()> {
        self.expect(|t| matches!(t, Token::OpenQasm), "'OPENQASM'")?;
        match self.next_token("version")? {
            (Token::FloatLiteral(v), _) if v == 2.0 => {}
            (Token::FloatLiteral(v), _) => return Err(QasmError::UnsupportedVersion(v.to_string())),
            (found, _) => return Err(QasmError::UnsupportedVersion(format!("{found:?}"))),
        }
        self.expect(|t| matches!(t, Token::Semicolon), "';'")?;
        Ok(())
    }

    // ── token-stream helpers ─────────────────────────────────────────────

    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<&Token> {
        self.peek().map(|s| &s.token)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn next_token(&mut self, expected: &'static str) -> QasmResult<(Token, usize)> {
        let spanned = self
            .tokens
            .get(self.pos)
            .ok_or(QasmError::UnexpectedEof(expected))?;
        self.pos += 1;
        Ok((spanned.token.clone(), spanned.line))
    }

    fn expect(
        &mut self,
        predicate: impl Fn(&Token) -> bool,
        expected: &'static str,
    ) -> QasmResult<()> {
        let (token, line) = self.next_token(expected)?;
        if predicate(&token) {
            Ok(())
        } else {
            Err(QasmError::UnexpectedToken {
                line,
                expected,
                found: format!("{token:?}"),
            })
        }
    }

    fn expect_identifier(&mut self, expected: &'static str) -> QasmResult<String> {
        match self.next_token(expected)? {
            (Token::Identifier(name), _) => Ok(name),
            (found, line) => Err(QasmError::UnexpectedToken {
                line,
                expected,
                found: format!("{found:?}"),
            }),
        }
    }

    fn expect_int(&mut self, expected: &'static str) -> QasmResult<u64> {
        match self.next_token(expected)? {
            (Token::IntLiteral(v), _) => Ok(v),
            (found, line) => Err(QasmError::UnexpectedToken {
                line,
                expected,
                found: format!("{found:?}"),
            }),
        }
    }

    fn expect_number(&mut self, expected: &'static str) -> QasmResult<f64> {
        match self.next_token(expected)? {
            (Token::IntLiteral(v), _) => Ok(v as f64),
            (Token::FloatLiteral(v), _) => Ok(v),
            (found, line) => Err(QasmError::UnexpectedToken {
                line,
                expected,
                found: format!("{found:?}"),
            }),
        }
    }
}

/// Map a gate name plus parsed parameters onto the gate vocabulary.
fn gate_kind(name: &str, params: &[f64], num_operands: usize, line: usize) -> QasmResult<GateKind> {
    let lower = name.to_ascii_lowercase();

    fn check(line: usize, gate: &str, expected: usize, got: usize) -> QasmResult<()> {
        if got == expected {
            Ok(())
        } else {
            Err(QasmError::WrongParameterCount {
                line,
                gate: gate.to_string(),
                expected,
                got,
            })
        }
    }
    let check_params = |expected: usize| check(line, &lower, expected, params.len());

    let gate = match lower.as_str() {
        "id" => StandardGate::I,
        "x" => StandardGate::X,
        "y" => StandardGate::Y,
        "z" => StandardGate::Z,
        "h" => StandardGate::H,
        "s" => StandardGate::S,
        "sdg" => StandardGate::Sdg,
        "t" => StandardGate::T,
        "tdg" => StandardGate::Tdg,
        "sx" => StandardGate::SX,
        "rx" => {
            check_params(1)?;
            StandardGate::Rx(params[0])
        }
        "ry" => {
            check_params(1)?;
            StandardGate::Ry(params[0])
        }
        "rz" => {
            check_params(1)?;
            StandardGate::Rz(params[0])
        }
        "p" => {
            check_params(1)?;
            StandardGate::P(params[0])
        }
        "u" | "u3" => {
            check_params(3)?;
            StandardGate::U(params[0], params[1], params[2])
        }
        "cx" | "cnot" => StandardGate::CX,
        "cy" => StandardGate::CY,
        "cz" => StandardGate::CZ,
        "ch" => StandardGate::CH,
        "swap" => StandardGate::Swap,
        "iswap" => StandardGate::ISwap,
        "crx" => {
            check_params(1)?;
            StandardGate::CRx(params[0])
        }
        "cry" => {
            check_params(1)?;
            StandardGate::CRy(params[0])
        }
        "crz" => {
            check_params(1)?;
            StandardGate::CRz(params[0])
        }
        "cp" => {
            check_params(1)?;
            StandardGate::CP(params[0])
        }
        "rxx" => {
            check_params(1)?;
            StandardGate::RXX(params[0])
        }
        "ryy" => {
            check_params(1)?;
            StandardGate::RYY(params[0])
        }
        "rzz" => {
            check_params(1)?;
            StandardGate::RZZ(params[0])
        }
        "ccx" => StandardGate::CCX,
        "cswap" => StandardGate::CSwap,
        _ => {
            // Open vocabulary: unknown names become custom gates with the
            // operand count as arity.
            return Ok(GateKind::Custom(
                CustomGate::new(lower, num_operands as u32).with_params(params.to_vec()),
            ));
        }
    };

    // Parameterless standard gates must not carry parameters.
    if gate.params().is_empty() && !params.is_empty() {
        return Err(QasmError::WrongParameterCount {
            line,
            gate: lower,
            expected: 0,
            got: params.len(),
        });
    }

    Ok(GateKind::Standard(gate))
}
