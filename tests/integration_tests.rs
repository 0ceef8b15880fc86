//! Integration tests for end-to-end code generation.
//!
//! These tests build whole type-checked programs and check the Java method
//! text produced by the public entry point.

use std::rc::Rc;

use pixelc_codegen::{
    ast::{
        ast::{Block, Dimension, NameDef, Program},
        expressions::{Expr, ExprKind, PixelSelector},
        statements::{
            AssignmentStmt, DoStmt, GuardedBlock, IfStmt, LValue, ReturnStmt, Stmt, VarDeclStmt,
            WriteStmt,
        },
        types::{Channel, Operator, Type},
    },
    compile, compile_with_options, render_error, CompilerOptions, Position, Span, MK_BLOCK,
    MK_EXPR,
};

fn program(name: &str, return_type: Type, params: Vec<NameDef>, block: Block) -> Program {
    Program {
        name: name.to_string(),
        return_type,
        params,
        block,
        span: Span::null(),
    }
}

fn param(name: &str, var_type: Type) -> NameDef {
    NameDef {
        name: name.to_string(),
        var_type,
        dimension: None,
        span: Span::null(),
    }
}

fn ident(name: &str, ty: Type) -> Expr {
    MK_EXPR!(ExprKind::Ident(name.to_string()), ty)
}

fn num(value: i32) -> Expr {
    MK_EXPR!(ExprKind::NumLit(value.to_string()), Type::Int)
}

fn binary(left: Expr, operator: Operator, right: Expr, ty: Type) -> Expr {
    MK_EXPR!(
        ExprKind::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        },
        ty
    )
}

fn declare(name: &str, var_type: Type, dimension: Option<Dimension>, init: Option<Expr>) -> Stmt {
    Stmt::VarDecl(VarDeclStmt {
        name_def: NameDef {
            name: name.to_string(),
            var_type,
            dimension,
            span: Span::null(),
        },
        initializer: init,
        span: Span::null(),
    })
}

fn assign(name: &str, var_type: Type, pixel: Option<PixelSelector>, channel: Option<Channel>, value: Expr) -> Stmt {
    Stmt::Assignment(AssignmentStmt {
        lvalue: LValue {
            name: name.to_string(),
            var_type,
            pixel,
            channel,
            span: Span::null(),
        },
        value,
        span: Span::null(),
    })
}

fn origin() -> PixelSelector {
    PixelSelector {
        x: Box::new(num(0)),
        y: Box::new(num(0)),
        span: Span::null(),
    }
}

fn write(expression: Expr) -> Stmt {
    Stmt::Write(WriteStmt {
        expression,
        span: Span::null(),
    })
}

fn ret(value: Expr) -> Stmt {
    Stmt::Return(ReturnStmt {
        value,
        span: Span::null(),
    })
}

fn guarded(guard: Expr, block: Block) -> GuardedBlock {
    GuardedBlock {
        guard,
        block,
        span: Span::null(),
    }
}

/// `int count(int n) { do n > 0 -> n = n - 1; write n; od; if n == 0 -> ... fi }`
fn countdown() -> Program {
    let n = || ident("n", Type::Int);
    program(
        "count",
        Type::Int,
        vec![param("n", Type::Int)],
        MK_BLOCK![
            Stmt::Do(DoStmt {
                guarded_blocks: vec![guarded(
                    binary(n(), Operator::Gt, num(0), Type::Boolean),
                    MK_BLOCK![
                        assign("n", Type::Int, None, None, binary(n(), Operator::Minus, num(1), Type::Int)),
                        write(n()),
                    ],
                )],
                span: Span::null(),
            }),
            Stmt::If(IfStmt {
                guarded_blocks: vec![guarded(
                    binary(n(), Operator::Eq, num(0), Type::Boolean),
                    MK_BLOCK![write(MK_EXPR!(
                        ExprKind::StringLit("\"done\"".to_string()),
                        Type::String
                    ))],
                )],
                span: Span::null(),
            }),
            ret(n()),
        ],
    )
}

#[test]
fn test_compile_redeclaration_program() {
    let x = || ident("x", Type::Int);
    let prog = program(
        "f",
        Type::Int,
        vec![param("n", Type::Int)],
        MK_BLOCK![
            declare("x", Type::Int, None, Some(num(5))),
            declare(
                "x",
                Type::Int,
                None,
                Some(binary(x(), Operator::Plus, ident("n", Type::Int), Type::Int))
            ),
            write(x()),
            ret(x()),
        ],
    );

    assert_eq!(
        compile(&prog).unwrap(),
        concat!(
            "int f(int n) {\n",
            "    int x = 5;\n",
            "    int x_0 = (x + n);\n",
            "    ConsoleIO.write(x_0);\n",
            "    return x_0;\n",
            "}\n",
        )
    );
}

#[test]
fn test_compile_image_program() {
    let im = || ident("im", Type::Image);
    let prog = program(
        "redden",
        Type::Image,
        vec![param("url", Type::String), param("w", Type::Int)],
        MK_BLOCK![
            declare(
                "im",
                Type::Image,
                Some(Dimension {
                    width: ident("w", Type::Int),
                    height: ident("w", Type::Int),
                    span: Span::null(),
                }),
                Some(ident("url", Type::String)),
            ),
            declare(
                "p",
                Type::Pixel,
                None,
                Some(MK_EXPR!(
                    ExprKind::Postfix {
                        base: Box::new(im()),
                        pixel: Some(origin()),
                        channel: None,
                    },
                    Type::Pixel
                )),
            ),
            assign(
                "p",
                Type::Pixel,
                None,
                Some(Channel::Red),
                MK_EXPR!(ExprKind::Const("Z".to_string()), Type::Int)
            ),
            assign("im", Type::Image, Some(origin()), None, ident("p", Type::Pixel)),
            ret(binary(im(), Operator::Times, ident("p", Type::Pixel), Type::Image)),
        ],
    );

    assert_eq!(
        compile(&prog).unwrap(),
        concat!(
            "BufferedImage redden(String url, int w) {\n",
            "    BufferedImage im = FileURLIO.readImage(url, w, w);\n",
            "    int p = ImageOps.getRGB(im, 0, 0);\n",
            "    p = PixelOps.setRed(p, 255);\n",
            "    ImageOps.setRGB(im, 0, 0, p);\n",
            "    return ImageOps.binaryImagePixelOp(ImageOps.OP.TIMES, im, p);\n",
            "}\n",
        )
    );
}

#[test]
fn test_compile_control_flow_program() {
    assert_eq!(
        compile(&countdown()).unwrap(),
        concat!(
            "int count(int n) {\n",
            "    boolean continue$0 = true;\n",
            "    while (continue$0) {\n",
            "        continue$0 = false;\n",
            "        if ((n > 0)) {\n",
            "            continue$0 = true;\n",
            "            {\n",
            "                n = (n - 1);\n",
            "                ConsoleIO.write(n);\n",
            "            }\n",
            "        }\n",
            "    }\n",
            "    if ((n == 0)) {\n",
            "        ConsoleIO.write(\"done\");\n",
            "    } else {\n",
            "    }\n",
            "    return n;\n",
            "}\n",
        )
    );
}

#[test]
fn test_local_shadowing_parameter_is_renamed() {
    let prog = program(
        "g",
        Type::Void,
        vec![param("n", Type::Int)],
        MK_BLOCK![
            declare("n", Type::Int, None, Some(ident("n", Type::Int))),
            write(ident("n", Type::Int)),
        ],
    );

    assert_eq!(
        compile(&prog).unwrap(),
        "void g(int n) {\n    int n_0 = n;\n    ConsoleIO.write(n_0);\n}\n"
    );
}

#[test]
fn test_reserved_source_names_are_renamed() {
    let prog = program(
        "h",
        Type::Void,
        vec![param("class", Type::Int)],
        MK_BLOCK![write(ident("class", Type::Int))],
    );

    assert_eq!(
        compile(&prog).unwrap(),
        "void h(int class_0) {\n    ConsoleIO.write(class_0);\n}\n"
    );
}

#[test]
fn test_runtime_class_names_are_renamed() {
    let math = || ident("Math", Type::Int);
    let prog = program(
        "shade",
        Type::Void,
        vec![],
        MK_BLOCK![
            declare("Math", Type::Int, None, Some(num(2))),
            write(binary(math(), Operator::Exp, num(2), Type::Int)),
            declare("PixelOps", Type::Pixel, None, None),
            assign("PixelOps", Type::Pixel, None, Some(Channel::Red), num(1)),
        ],
    );

    assert_eq!(
        compile(&prog).unwrap(),
        concat!(
            "void shade() {\n",
            "    int Math_0 = 2;\n",
            "    ConsoleIO.write(((int)Math.round(Math.pow(Math_0, 2))));\n",
            "    int PixelOps_0;\n",
            "    PixelOps_0 = PixelOps.setRed(PixelOps_0, 1);\n",
            "}\n",
        )
    );
}

#[test]
fn test_compile_is_deterministic() {
    let prog = countdown();
    let first = compile(&prog).unwrap();
    let second = compile(&prog).unwrap();
    assert_eq!(first, second);
    assert!(second.contains("continue$0"));
    assert!(!second.contains("continue$1"));
}

#[test]
fn test_braces_are_balanced() {
    let code = compile(&countdown()).unwrap();
    let opened = code.matches('{').count();
    let closed = code.matches('}').count();
    assert_eq!(opened, closed);
}

#[test]
fn test_indent_width_option() {
    let prog = program("k", Type::Void, vec![], MK_BLOCK![write(num(1))]);
    let code = compile_with_options(&prog, CompilerOptions { indent_width: 2 }).unwrap();
    assert_eq!(code, "void k() {\n  ConsoleIO.write(1);\n}\n");
}

#[test]
fn test_empty_program() {
    let prog = program("noop", Type::Void, vec![], MK_BLOCK![]);
    assert_eq!(compile(&prog).unwrap(), "void noop() {\n}\n");
}

#[test]
fn test_invalid_program_names() {
    for name in ["class", "2fast", "has space", ""] {
        let prog = program(name, Type::Void, vec![], MK_BLOCK![]);
        let error = compile(&prog).unwrap_err();
        assert_eq!(error.get_error_name(), "InvalidProgramNameError", "{:?}", name);
    }
}

#[test]
fn test_void_parameter_is_rejected() {
    let prog = program("v", Type::Void, vec![param("x", Type::Void)], MK_BLOCK![]);
    let error = compile(&prog).unwrap_err();
    assert_eq!(error.get_error_name(), "UnsupportedTypeError");
}

#[test]
fn test_error_aborts_without_partial_output() {
    let prog = program(
        "broken",
        Type::Void,
        vec![],
        MK_BLOCK![
            write(num(1)),
            write(MK_EXPR!(ExprKind::Const("PURPLE".to_string()), Type::Pixel)),
        ],
    );
    let error = compile(&prog).unwrap_err();
    assert_eq!(error.get_error_name(), "UnsupportedConstantError");
}

#[test]
fn test_render_unresolved_name() {
    let source = "void f() {\n  write y;\n}\n";
    let file = Rc::new("f.plc".to_string());
    let span = Span {
        start: Position(19, file.clone()),
        end: Position(20, file),
    };
    let prog = program(
        "f",
        Type::Void,
        vec![],
        MK_BLOCK![write(MK_EXPR!(ExprKind::Ident("y".to_string()), Type::Int, span))],
    );

    let error = compile(&prog).unwrap_err();
    let rendered = render_error(&error, source, "f.plc");
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[0].starts_with("Error: UnresolvedNameError ("));
    assert_eq!(lines[1], "-> f.plc");
    assert_eq!(lines[3], "2 | write y;");
    assert_eq!(lines[4], "  | ------^");
}
