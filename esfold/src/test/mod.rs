#[cfg(test)]
mod tests {
    use anyhow::bail;
    use serde_json::{json, Value};

    use crate::{
        ast::{
            AssignmentTargetIdentifier, AstError, BindingIdentifier, IdentifierExpression,
            LiteralNullExpression, Program,
        },
        reduce, reduce_json, ConfigError, Monoid, MonoidAdapter, MonoidReducer, MonoidalReducer,
    };

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // ----- reducers -----

    /// Concatenates identifier names in the order the fold meets them.
    struct Names {
        monoid: MonoidAdapter<String>,
    }

    impl Names {
        fn new() -> Self {
            Self {
                monoid: MonoidAdapter::new(String::new(), |a: String, b: String| a + &b),
            }
        }
    }

    impl MonoidalReducer for Names {
        type Output = String;

        fn monoid(&self) -> &MonoidAdapter<String> {
            &self.monoid
        }

        fn reduce_identifier_expression(
            &mut self,
            node: &IdentifierExpression,
        ) -> anyhow::Result<String> {
            Ok(node.name.clone())
        }

        fn reduce_binding_identifier(&mut self, node: &BindingIdentifier) -> anyhow::Result<String> {
            Ok(node.name.clone())
        }

        fn reduce_assignment_target_identifier(
            &mut self,
            node: &AssignmentTargetIdentifier,
        ) -> anyhow::Result<String> {
            Ok(node.name.clone())
        }
    }

    struct ContainsNull {
        monoid: MonoidAdapter<bool>,
    }

    impl ContainsNull {
        fn new() -> Self {
            Self {
                monoid: MonoidAdapter::new(false, |a: bool, b: bool| a || b),
            }
        }
    }

    impl MonoidalReducer for ContainsNull {
        type Output = bool;

        fn monoid(&self) -> &MonoidAdapter<bool> {
            &self.monoid
        }

        fn reduce_literal_null_expression(
            &mut self,
            _node: &LiteralNullExpression,
        ) -> anyhow::Result<bool> {
            Ok(true)
        }
    }

    /// Counts identifiers and refuses to reduce one named `boom`.
    struct Boom {
        monoid: MonoidAdapter<usize>,
        seen: usize,
    }

    impl Boom {
        fn new() -> Self {
            Self {
                monoid: MonoidAdapter::new(0, |a: usize, b: usize| a + b),
                seen: 0,
            }
        }
    }

    impl MonoidalReducer for Boom {
        type Output = usize;

        fn monoid(&self) -> &MonoidAdapter<usize> {
            &self.monoid
        }

        fn reduce_identifier_expression(
            &mut self,
            node: &IdentifierExpression,
        ) -> anyhow::Result<usize> {
            self.seen += 1;
            if node.name == "boom" {
                bail!("refusing to reduce `{}`", node.name);
            }
            Ok(1)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Product(i64);

    impl Monoid for Product {
        fn empty() -> Self {
            Product(1)
        }

        fn concat(self, other: Self) -> Self {
            Product(self.0 * other.0)
        }
    }

    // ----- tree builders -----

    fn id(name: &str) -> Value {
        json!({ "type": "IdentifierExpression", "name": name })
    }

    fn bind(name: &str) -> Value {
        json!({ "type": "BindingIdentifier", "name": name })
    }

    fn target(name: &str) -> Value {
        json!({ "type": "AssignmentTargetIdentifier", "name": name })
    }

    fn stmt(expression: Value) -> Value {
        json!({ "type": "ExpressionStatement", "expression": expression })
    }

    fn block(statements: Vec<Value>) -> Value {
        json!({ "type": "Block", "statements": statements })
    }

    fn script(statements: Vec<Value>) -> Value {
        json!({ "type": "Script", "directives": [], "statements": statements })
    }

    fn module(items: Vec<Value>) -> Value {
        json!({ "type": "Module", "directives": [], "items": items })
    }

    /// A module touching most of the grammar. Its identifiers, in source
    /// order, spell `dfghijklmnopqrstuyzABCDEIJK`.
    fn kitchen_sink() -> Value {
        module(vec![
            // import d, { e as f } from "m";
            json!({
                "type": "Import",
                "moduleSpecifier": "m",
                "defaultBinding": bind("d"),
                "namedImports": [{ "type": "ImportSpecifier", "name": "e", "binding": bind("f") }],
            }),
            // export { g };
            json!({
                "type": "ExportLocals",
                "namedExports": [{ "type": "ExportLocalSpecifier", "name": id("g"), "exportedName": null }],
            }),
            // export function* h(i = j, ...k) { yield l; return; }
            json!({
                "type": "Export",
                "declaration": {
                    "type": "FunctionDeclaration",
                    "isGenerator": true,
                    "name": bind("h"),
                    "params": {
                        "type": "FormalParameters",
                        "items": [{ "type": "BindingWithDefault", "binding": bind("i"), "init": id("j") }],
                        "rest": bind("k"),
                    },
                    "body": {
                        "type": "FunctionBody",
                        "directives": [],
                        "statements": [
                            stmt(json!({ "type": "YieldExpression", "expression": id("l") })),
                            { "type": "ReturnStatement", "expression": null },
                        ],
                    },
                },
            }),
            // label: for (const [m, , n] of o) { continue label; }
            json!({
                "type": "LabeledStatement",
                "label": "label",
                "body": {
                    "type": "ForOfStatement",
                    "left": {
                        "type": "VariableDeclaration",
                        "kind": "const",
                        "declarators": [{
                            "type": "VariableDeclarator",
                            "binding": { "type": "ArrayBinding", "elements": [bind("m"), null, bind("n")], "rest": null },
                            "init": null,
                        }],
                    },
                    "right": id("o"),
                    "body": {
                        "type": "BlockStatement",
                        "block": block(vec![json!({ "type": "ContinueStatement", "label": "label" })]),
                    },
                },
            }),
            // try { p`${q}`; } catch ({ r }) { debugger; }
            json!({
                "type": "TryCatchStatement",
                "body": block(vec![stmt(json!({
                    "type": "TemplateExpression",
                    "tag": id("p"),
                    "elements": [
                        { "type": "TemplateElement", "rawValue": "" },
                        id("q"),
                        { "type": "TemplateElement", "rawValue": "" },
                    ],
                }))]),
                "catchClause": {
                    "type": "CatchClause",
                    "binding": {
                        "type": "ObjectBinding",
                        "properties": [{ "type": "BindingPropertyIdentifier", "binding": bind("r"), "init": null }],
                    },
                    "body": block(vec![json!({ "type": "DebuggerStatement" })]),
                },
            }),
            // s = { t, [u]: /v/g, get w() { return this; }, set x(y) {} };
            stmt(json!({
                "type": "AssignmentExpression",
                "binding": target("s"),
                "expression": {
                    "type": "ObjectExpression",
                    "properties": [
                        { "type": "ShorthandProperty", "name": id("t") },
                        {
                            "type": "DataProperty",
                            "name": { "type": "ComputedPropertyName", "expression": id("u") },
                            "expression": { "type": "LiteralRegExpExpression", "pattern": "v", "global": true },
                        },
                        {
                            "type": "Getter",
                            "name": { "type": "StaticPropertyName", "value": "w" },
                            "body": {
                                "type": "FunctionBody",
                                "directives": [],
                                "statements": [{ "type": "ReturnStatement", "expression": { "type": "ThisExpression" } }],
                            },
                        },
                        {
                            "type": "Setter",
                            "name": { "type": "StaticPropertyName", "value": "x" },
                            "param": bind("y"),
                            "body": { "type": "FunctionBody", "directives": [], "statements": [] },
                        },
                    ],
                },
            })),
            // new z(...A, 1 + 2e308);
            stmt(json!({
                "type": "NewExpression",
                "callee": id("z"),
                "arguments": [
                    { "type": "SpreadElement", "expression": id("A") },
                    {
                        "type": "BinaryExpression",
                        "left": { "type": "LiteralNumericExpression", "value": 1 },
                        "operator": "+",
                        "right": { "type": "LiteralInfinityExpression" },
                    },
                ],
            })),
            // do B--; while (!C ? null : "s");
            json!({
                "type": "DoWhileStatement",
                "body": stmt(json!({
                    "type": "UpdateExpression",
                    "isPrefix": false,
                    "operator": "--",
                    "operand": target("B"),
                })),
                "test": {
                    "type": "ConditionalExpression",
                    "test": { "type": "UnaryExpression", "operator": "!", "operand": id("C") },
                    "consequent": { "type": "LiteralNullExpression" },
                    "alternate": { "type": "LiteralStringExpression", "value": "s" },
                },
            }),
            // D += () => E;
            stmt(json!({
                "type": "CompoundAssignmentExpression",
                "binding": target("D"),
                "operator": "+=",
                "expression": {
                    "type": "ArrowExpression",
                    "params": { "type": "FormalParameters", "items": [], "rest": null },
                    "body": id("E"),
                },
            })),
            // I.prop[J](K);
            stmt(json!({
                "type": "CallExpression",
                "callee": {
                    "type": "ComputedMemberExpression",
                    "object": { "type": "StaticMemberExpression", "object": id("I"), "property": "prop" },
                    "expression": id("J"),
                },
                "arguments": [id("K")],
            })),
        ])
    }

    // ----- properties -----

    #[test]
    fn statements_fold_in_source_order() -> anyhow::Result<()> {
        init();
        // { a; b; c; }
        let tree = script(vec![json!({
            "type": "BlockStatement",
            "block": block(vec![stmt(id("a")), stmt(id("b")), stmt(id("c"))]),
        })]);
        assert_eq!(reduce_json(&mut Names::new(), &tree)?, "abc");
        Ok(())
    }

    #[test]
    fn whole_grammar_folds_in_source_order() -> anyhow::Result<()> {
        init();
        let out = reduce_json(&mut Names::new(), &kitchen_sink())?;
        assert_eq!(out, "dfghijklmnopqrstuyzABCDEIJK");
        Ok(())
    }

    #[test]
    fn folding_is_deterministic() -> anyhow::Result<()> {
        init();
        let program = Program::from_json(&kitchen_sink())?;
        let mut names = Names::new();
        let first = reduce(&mut names, &program)?;
        let second = reduce(&mut names, &program)?;
        assert_eq!(first, second);
        assert_eq!(first, reduce(&mut Names::new(), &program)?);
        Ok(())
    }

    #[test]
    fn leaves_fold_to_identity() -> anyhow::Result<()> {
        init();
        let tree = script(vec![
            json!({ "type": "EmptyStatement" }),
            json!({ "type": "DebuggerStatement" }),
            stmt(json!({ "type": "ThisExpression" })),
            stmt(json!({ "type": "LiteralBooleanExpression", "value": true })),
            stmt(json!({ "type": "LiteralNumericExpression", "value": 0 })),
            json!({ "type": "BreakStatement", "label": null }),
        ]);
        let mut product = MonoidReducer::<Product>::of_monoid();
        assert_eq!(reduce_json(&mut product, &tree)?, Product(1));
        Ok(())
    }

    #[test]
    fn missing_else_folds_like_identity() -> anyhow::Result<()> {
        init();
        // if (a) b;
        let without = script(vec![json!({
            "type": "IfStatement",
            "test": id("a"),
            "consequent": stmt(id("b")),
            "alternate": null,
        })]);
        // if (a) b; else ;
        let with_empty = script(vec![json!({
            "type": "IfStatement",
            "test": id("a"),
            "consequent": stmt(id("b")),
            "alternate": { "type": "EmptyStatement" },
        })]);
        let mut names = Names::new();
        assert_eq!(reduce_json(&mut names, &without)?, "ab");
        assert_eq!(
            reduce_json(&mut names, &without)?,
            reduce_json(&mut names, &with_empty)?
        );
        Ok(())
    }

    #[test]
    fn base_table_covers_the_grammar() -> anyhow::Result<()> {
        init();
        let mut plain = MonoidReducer::new(MonoidAdapter::new(0usize, |a: usize, b: usize| a + b));
        assert_eq!(reduce_json(&mut plain, &kitchen_sink())?, 0);
        Ok(())
    }

    #[test]
    fn unknown_kind_is_rejected_before_any_callback() {
        init();
        let tree = script(vec![
            stmt(id("x")),
            stmt(json!({ "type": "AwaitExpression", "expression": id("p") })),
        ]);
        let mut boom = Boom::new();
        let err = reduce_json(&mut boom, &tree).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AstError>(),
            Some(&AstError::UnknownKind("AwaitExpression".into()))
        );
        assert_eq!(boom.seen, 0);
    }

    #[test]
    fn empty_monoid_is_rejected() {
        init();
        let built = MonoidReducer::<bool>::from_builder(MonoidAdapter::builder());
        assert_eq!(built.err(), Some(ConfigError::Empty));

        let built = MonoidReducer::<bool>::from_builder(MonoidAdapter::builder().identity(false));
        assert_eq!(built.err(), Some(ConfigError::MissingAppend));
    }

    #[test]
    fn built_monoid_drives_a_fold() -> anyhow::Result<()> {
        init();
        let builder = MonoidAdapter::builder()
            .identity(0usize)
            .append(|a: usize, b: usize| a + b);
        let mut plain = MonoidReducer::from_builder(builder)?;
        assert_eq!(reduce_json(&mut plain, &script(vec![stmt(id("x"))]))?, 0);
        Ok(())
    }

    #[test]
    fn contains_null() -> anyhow::Result<()> {
        init();
        let null = module(vec![stmt(json!({ "type": "LiteralNullExpression" }))]);
        let no_null = module(vec![stmt(id("x"))]);
        let mut reducer = ContainsNull::new();
        assert!(reduce_json(&mut reducer, &null)?);
        assert!(!reduce_json(&mut reducer, &no_null)?);
        assert!(reduce_json(&mut reducer, &kitchen_sink())?);
        Ok(())
    }

    #[test]
    fn callback_error_aborts_the_fold() {
        init();
        let tree = script(vec![stmt(id("x")), stmt(id("boom")), stmt(id("y"))]);
        let mut boom = Boom::new();
        let err = reduce_json(&mut boom, &tree).unwrap_err();
        assert_eq!(err.to_string(), "refusing to reduce `boom`");
        assert_eq!(boom.seen, 2);
    }

    // ----- individual rules -----

    #[test]
    fn array_target_drops_holes_and_appends_rest() -> anyhow::Result<()> {
        init();
        // [a, , b, ...c] = d;
        let tree = script(vec![stmt(json!({
            "type": "AssignmentExpression",
            "binding": {
                "type": "ArrayAssignmentTarget",
                "elements": [target("a"), null, target("b")],
                "rest": target("c"),
            },
            "expression": id("d"),
        }))]);
        assert_eq!(reduce_json(&mut Names::new(), &tree)?, "abcd");
        Ok(())
    }

    #[test]
    fn array_holes_add_nothing() -> anyhow::Result<()> {
        init();
        // [null, , , null];
        let tree = script(vec![stmt(json!({
            "type": "ArrayExpression",
            "elements": [{ "type": "LiteralNullExpression" }, null, null, { "type": "LiteralNullExpression" }],
        }))]);
        let mut count = MonoidReducer::new(MonoidAdapter::new(0usize, |a: usize, b: usize| a + b));
        assert_eq!(reduce_json(&mut count, &tree)?, 0);
        assert!(reduce_json(&mut ContainsNull::new(), &tree)?);
        Ok(())
    }

    #[test]
    fn switch_default_keeps_its_position() -> anyhow::Result<()> {
        init();
        // switch (d) { case a: x; default: y; case b: z; }
        let tree = script(vec![json!({
            "type": "SwitchStatementWithDefault",
            "discriminant": id("d"),
            "preDefaultCases": [{ "type": "SwitchCase", "test": id("a"), "consequent": [stmt(id("x"))] }],
            "defaultCase": { "type": "SwitchDefault", "consequent": [stmt(id("y"))] },
            "postDefaultCases": [{ "type": "SwitchCase", "test": id("b"), "consequent": [stmt(id("z"))] }],
        })]);
        assert_eq!(reduce_json(&mut Names::new(), &tree)?, "daxybz");
        Ok(())
    }

    #[test]
    fn try_finally_without_catch() -> anyhow::Result<()> {
        init();
        // try { a; } finally { b; }
        let tree = script(vec![json!({
            "type": "TryFinallyStatement",
            "body": block(vec![stmt(id("a"))]),
            "catchClause": null,
            "finalizer": block(vec![stmt(id("b"))]),
        })]);
        assert_eq!(reduce_json(&mut Names::new(), &tree)?, "ab");
        Ok(())
    }

    #[test]
    fn class_with_and_without_heritage() -> anyhow::Result<()> {
        init();
        let class = |heritage: Value| {
            script(vec![json!({
                "type": "ClassDeclaration",
                "name": bind("A"),
                "super": heritage,
                "elements": [{
                    "type": "ClassElement",
                    "isStatic": false,
                    "method": {
                        "type": "Method",
                        "isGenerator": false,
                        "name": { "type": "StaticPropertyName", "value": "m" },
                        "params": { "type": "FormalParameters", "items": [bind("p")], "rest": null },
                        "body": { "type": "FunctionBody", "directives": [], "statements": [stmt(id("x"))] },
                    },
                }],
            })])
        };
        let mut names = Names::new();
        // class A { m(p) { x; } }
        assert_eq!(reduce_json(&mut names, &class(Value::Null))?, "Apx");
        // class A extends B { m(p) { x; } }
        assert_eq!(reduce_json(&mut names, &class(id("B")))?, "ABpx");
        Ok(())
    }

    #[test]
    fn for_statement_with_empty_header() -> anyhow::Result<()> {
        init();
        // for (;;) a;
        let empty = script(vec![json!({
            "type": "ForStatement",
            "init": null,
            "test": null,
            "update": null,
            "body": stmt(id("a")),
        })]);
        // for (let i = n; i; ++i) a;
        let full = script(vec![json!({
            "type": "ForStatement",
            "init": {
                "type": "VariableDeclaration",
                "kind": "let",
                "declarators": [{ "type": "VariableDeclarator", "binding": bind("i"), "init": id("n") }],
            },
            "test": id("i"),
            "update": { "type": "UpdateExpression", "isPrefix": true, "operator": "++", "operand": target("i") },
            "body": stmt(id("a")),
        })]);
        let mut names = Names::new();
        assert_eq!(reduce_json(&mut names, &empty)?, "a");
        assert_eq!(reduce_json(&mut names, &full)?, "iniia");
        Ok(())
    }

    #[test]
    fn remaining_rules_fold_in_source_order() -> anyhow::Result<()> {
        init();
        let no_params = json!({ "type": "FormalParameters", "items": [], "rest": null });
        let tree = module(vec![
            // import a, * as b from "m";
            json!({
                "type": "ImportNamespace",
                "moduleSpecifier": "m",
                "defaultBinding": bind("a"),
                "namespaceBinding": bind("b"),
            }),
            // export * from "m";
            json!({ "type": "ExportAllFrom", "moduleSpecifier": "m" }),
            // export { x as y } from "m";
            json!({
                "type": "ExportFrom",
                "namedExports": [{ "type": "ExportFromSpecifier", "name": "x", "exportedName": "y" }],
                "moduleSpecifier": "m",
            }),
            // export default c;
            json!({ "type": "ExportDefault", "body": id("c") }),
            // with (d) e;
            json!({ "type": "WithStatement", "object": id("d"), "body": stmt(id("e")) }),
            // while (f) throw g;
            json!({
                "type": "WhileStatement",
                "test": id("f"),
                "body": { "type": "ThrowStatement", "expression": id("g") },
            }),
            // for (h in i) ;
            json!({
                "type": "ForInStatement",
                "left": target("h"),
                "right": id("i"),
                "body": { "type": "EmptyStatement" },
            }),
            // switch (j) { case k: l; }
            json!({
                "type": "SwitchStatement",
                "discriminant": id("j"),
                "cases": [{ "type": "SwitchCase", "test": id("k"), "consequent": [stmt(id("l"))] }],
            }),
            // var m = class n extends o { p() { super.q; } };
            json!({
                "type": "VariableDeclarationStatement",
                "declaration": {
                    "type": "VariableDeclaration",
                    "kind": "var",
                    "declarators": [{
                        "type": "VariableDeclarator",
                        "binding": bind("m"),
                        "init": {
                            "type": "ClassExpression",
                            "name": bind("n"),
                            "super": id("o"),
                            "elements": [{
                                "type": "ClassElement",
                                "isStatic": false,
                                "method": {
                                    "type": "Method",
                                    "isGenerator": false,
                                    "name": { "type": "StaticPropertyName", "value": "p" },
                                    "params": no_params,
                                    "body": {
                                        "type": "FunctionBody",
                                        "directives": [],
                                        "statements": [stmt(json!({
                                            "type": "StaticMemberExpression",
                                            "object": { "type": "Super" },
                                            "property": "q",
                                        }))],
                                    },
                                },
                            }],
                        },
                    }],
                },
            }),
            // r = function* s(t) { yield* u; new.target; `${v}`; };
            stmt(json!({
                "type": "AssignmentExpression",
                "binding": target("r"),
                "expression": {
                    "type": "FunctionExpression",
                    "isGenerator": true,
                    "name": bind("s"),
                    "params": { "type": "FormalParameters", "items": [bind("t")], "rest": null },
                    "body": {
                        "type": "FunctionBody",
                        "directives": [],
                        "statements": [
                            stmt(json!({ "type": "YieldGeneratorExpression", "expression": id("u") })),
                            stmt(json!({ "type": "NewTargetExpression" })),
                            stmt(json!({
                                "type": "TemplateExpression",
                                "tag": null,
                                "elements": [
                                    { "type": "TemplateElement", "rawValue": "" },
                                    id("v"),
                                    { "type": "TemplateElement", "rawValue": "" },
                                ],
                            })),
                        ],
                    },
                },
            })),
            // ({ w, x: y = z, [A]: B } = C);
            stmt(json!({
                "type": "AssignmentExpression",
                "binding": {
                    "type": "ObjectAssignmentTarget",
                    "properties": [
                        { "type": "AssignmentTargetPropertyIdentifier", "binding": target("w"), "init": null },
                        {
                            "type": "AssignmentTargetPropertyProperty",
                            "name": { "type": "StaticPropertyName", "value": "x" },
                            "binding": { "type": "AssignmentTargetWithDefault", "binding": target("y"), "init": id("z") },
                        },
                        {
                            "type": "AssignmentTargetPropertyProperty",
                            "name": { "type": "ComputedPropertyName", "expression": id("A") },
                            "binding": target("B"),
                        },
                    ],
                },
                "expression": id("C"),
            })),
            // D.prop = E[F];
            stmt(json!({
                "type": "AssignmentExpression",
                "binding": { "type": "StaticMemberAssignmentTarget", "object": id("D"), "property": "prop" },
                "expression": { "type": "ComputedMemberExpression", "object": id("E"), "expression": id("F") },
            })),
            // G[H] = 0;
            stmt(json!({
                "type": "AssignmentExpression",
                "binding": { "type": "ComputedMemberAssignmentTarget", "object": id("G"), "expression": id("H") },
                "expression": { "type": "LiteralNumericExpression", "value": 0 },
            })),
            // let { I: J } = K;
            json!({
                "type": "VariableDeclarationStatement",
                "declaration": {
                    "type": "VariableDeclaration",
                    "kind": "let",
                    "declarators": [{
                        "type": "VariableDeclarator",
                        "binding": {
                            "type": "ObjectBinding",
                            "properties": [{
                                "type": "BindingPropertyProperty",
                                "name": { "type": "StaticPropertyName", "value": "I" },
                                "binding": bind("J"),
                            }],
                        },
                        "init": id("K"),
                    }],
                },
            }),
            // L ? M : N;
            stmt(json!({
                "type": "ConditionalExpression",
                "test": id("L"),
                "consequent": id("M"),
                "alternate": id("N"),
            })),
        ]);
        // Property names (`p`, `q`, `x`, `I`) and export specifiers are node
        // data, not identifiers, so they fold to the identity.
        let out = reduce_json(&mut Names::new(), &tree)?;
        assert_eq!(out, "abcdefghijklmnorstuvwyzABCDEFGHJKLMN");
        Ok(())
    }

    #[test]
    fn deep_chain_folds_on_a_large_stack() -> anyhow::Result<()> {
        init();
        // a + a + ... + a
        let mut expr = id("a");
        for _ in 1..1000 {
            expr = json!({ "type": "BinaryExpression", "left": expr, "operator": "+", "right": id("a") });
        }
        let tree = script(vec![stmt(expr)]);
        let out = std::thread::Builder::new()
            .stack_size(256 * 1024 * 1024)
            .spawn(move || reduce_json(&mut Names::new(), &tree))?
            .join()
            .map_err(|_| anyhow::anyhow!("fold thread panicked"))??;
        assert_eq!(out, "a".repeat(1000));
        Ok(())
    }

    #[test]
    fn names_monoid_is_lawful() -> anyhow::Result<()> {
        init();
        let names = Names::new();
        let samples: Vec<String> = ["", "a", "bc"].iter().map(|s| s.to_string()).collect();
        names.monoid().check_laws(&samples)?;
        Ok(())
    }
}
